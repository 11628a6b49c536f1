//! Market assumptions driving the valuation seed and value timeline

use serde::{Deserialize, Serialize};

/// Seed ranges and timeline factors for the synthesized market model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketAssumptions {
    /// Lower bound of the baseline value draw
    pub base_value_min: f64,

    /// Width of the baseline value draw interval
    pub base_value_span: f64,

    /// Lower bound of the annual appreciation rate draw
    pub appreciation_min: f64,

    /// Width of the appreciation rate draw interval
    pub appreciation_span: f64,

    /// Fraction of baseline value the historical curve starts from
    pub historical_start_factor: f64,

    /// Annual drag subtracted from appreciation on the historical leg
    pub historical_drag: f64,

    /// Years of trailing history before the current year
    pub historical_years: u32,

    /// Years of forward projection after the current year
    pub projection_years: u32,

    /// Conservative band multiplier on projected value
    pub conservative_factor: f64,

    /// Optimistic band multiplier on projected value
    pub optimistic_factor: f64,
}

impl Default for MarketAssumptions {
    fn default() -> Self {
        Self {
            base_value_min: 250_000.0,
            base_value_span: 300_000.0,
            appreciation_min: 0.03,
            appreciation_span: 0.04,
            historical_start_factor: 0.82,
            historical_drag: 0.01,
            historical_years: 5,
            projection_years: 5,
            conservative_factor: 0.95,
            optimistic_factor: 1.05,
        }
    }
}

impl MarketAssumptions {
    /// Upper bound (exclusive) of the baseline value draw
    pub fn base_value_max(&self) -> f64 {
        self.base_value_min + self.base_value_span
    }

    /// Upper bound (exclusive) of the appreciation rate draw
    pub fn appreciation_max(&self) -> f64 {
        self.appreciation_min + self.appreciation_span
    }
}
