//! Valuation seed generation
//!
//! Stand-in for an external valuation feed: a baseline market value and an
//! annual appreciation rate drawn from a pluggable random source.

use serde::{Deserialize, Serialize};

use crate::assumptions::MarketAssumptions;
use crate::random::RandomSource;

/// Baseline valuation for one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationSeed {
    /// Baseline market value in whole dollars
    pub base_value: f64,

    /// Annual appreciation rate as a fraction
    pub appreciation_rate: f64,
}

impl ValuationSeed {
    /// Draw a fresh seed. Consumes exactly two values from the source:
    /// first the base value, then the appreciation rate.
    pub fn draw(rng: &mut dyn RandomSource, market: &MarketAssumptions) -> Self {
        let base_value = (market.base_value_min + rng.next_f64() * market.base_value_span).floor();
        let appreciation_rate = market.appreciation_min + rng.next_f64() * market.appreciation_span;

        Self {
            base_value,
            appreciation_rate,
        }
    }
}
