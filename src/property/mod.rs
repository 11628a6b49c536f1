//! Subject property input and validation

mod data;
pub mod loader;

pub use data::{PropertyInput, InvalidInput};
