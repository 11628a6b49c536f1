//! Real Estate Analyzer - Investment valuation and strategy recommendation engine
//!
//! This library provides:
//! - Synthesized property valuation seeds (stand-in for an external feed)
//! - Historical and projected value timelines
//! - Purchase financing and carrying-cost breakdowns
//! - Long-term and short-term rental cash-flow projections
//! - Fix-and-flip, BRRR, and buy-and-hold strategy evaluation
//! - An ordered recommendation rule chain with rationale text

pub mod property;
pub mod assumptions;
pub mod analysis;
pub mod random;
pub mod scenario;

// Re-export commonly used types
pub use property::{PropertyInput, InvalidInput};
pub use assumptions::Assumptions;
pub use analysis::{AnalysisEngine, AnalysisConfig, AnalysisResult, Recommendation};
pub use random::{RandomSource, SplitMix64};
pub use scenario::AnalysisRunner;
