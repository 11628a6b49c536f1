//! Property input record and its validation rules

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure for a submitted property.
///
/// This is the engine's only failure mode; it is raised before any
/// computation runs, so a failed analysis produces nothing partial.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    /// A required address field is missing or blank
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The rehab budget is negative
    #[error("rehab cost must be non-negative, got {0}")]
    NegativeRehabCost(f64),
}

/// The subject property as submitted for analysis.
///
/// Address fields are only checked for presence; the valuation seed does
/// not derive anything numeric from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyInput {
    /// Street address line
    pub street: String,

    /// City name
    pub city: String,

    /// State abbreviation
    pub state: String,

    /// ZIP code
    pub zip: String,

    /// Rehabilitation budget in dollars; 0 for a turnkey property
    #[serde(default)]
    pub rehab_cost: f64,
}

impl PropertyInput {
    /// Create an input record for the given address and rehab budget.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
        rehab_cost: f64,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            state: state.into(),
            zip: zip.into(),
            rehab_cost,
        }
    }

    /// Check the input contract: all address fields present, rehab budget
    /// non-negative. Whitespace-only fields count as missing.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.street.trim().is_empty() {
            return Err(InvalidInput::MissingField("street"));
        }
        if self.city.trim().is_empty() {
            return Err(InvalidInput::MissingField("city"));
        }
        if self.state.trim().is_empty() {
            return Err(InvalidInput::MissingField("state"));
        }
        if self.zip.trim().is_empty() {
            return Err(InvalidInput::MissingField("zip"));
        }
        if self.rehab_cost < 0.0 {
            return Err(InvalidInput::NegativeRehabCost(self.rehab_cost));
        }
        Ok(())
    }

    /// Single-line display address: "street, city, state zip".
    pub fn address(&self) -> String {
        format!("{}, {}, {} {}", self.street, self.city, self.state, self.zip)
    }
}
