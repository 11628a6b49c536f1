//! Analysis assumptions: market seed ranges, financing terms, rental
//! economics, and strategy thresholds

mod market;
mod financing;
mod rental;
mod strategy;
pub mod loader;

pub use market::MarketAssumptions;
pub use financing::FinancingAssumptions;
pub use rental::RentalAssumptions;
pub use strategy::StrategyAssumptions;

use std::path::Path;

/// Container for all analysis assumptions
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Assumptions {
    pub market: MarketAssumptions,
    pub financing: FinancingAssumptions,
    pub rental: RentalAssumptions,
    pub strategy: StrategyAssumptions,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            market: MarketAssumptions::default(),
            financing: FinancingAssumptions::default(),
            rental: RentalAssumptions::default(),
            strategy: StrategyAssumptions::default(),
        }
    }
}

impl Assumptions {
    /// Load assumptions from a `name,value` CSV file, overlaying the
    /// defaults. Unknown names are logged and skipped.
    pub fn from_csv_path(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let overrides = loader::load_overrides(path)?;
        let mut assumptions = Self::default();
        loader::apply_overrides(&mut assumptions, &overrides);
        Ok(assumptions)
    }
}
