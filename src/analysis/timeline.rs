//! Historical and projected property value timelines

use serde::{Deserialize, Serialize};

use super::ValuationSeed;
use crate::assumptions::MarketAssumptions;

/// One year of trailing valuation history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub year: i32,
    pub value: f64,
}

/// One year of forward projection with confidence bands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub year: i32,
    pub projected: f64,
    pub conservative: f64,
    pub optimistic: f64,
}

/// Six years of trailing history and six years of forward projection,
/// sharing the current year as their boundary point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueTimeline {
    pub historical: Vec<HistoricalPoint>,
    pub projected: Vec<ProjectedPoint>,
}

impl ValueTimeline {
    /// Build the timeline for a seed, anchored at `current_year`.
    ///
    /// The historical leg compounds forward from `base_value * start_factor`
    /// at appreciation minus a drag; the recorded value is rounded but the
    /// running value is not. The final historical point therefore drifts a
    /// few percent from `base_value`, which the upstream model accepts as a
    /// smoothing artifact rather than forcing agreement.
    pub fn build(seed: &ValuationSeed, market: &MarketAssumptions, current_year: i32) -> Self {
        let historical_growth = 1.0 + seed.appreciation_rate - market.historical_drag;
        let mut running = seed.base_value * market.historical_start_factor;

        let mut historical = Vec::with_capacity(market.historical_years as usize + 1);
        for offset in -(market.historical_years as i32)..=0 {
            historical.push(HistoricalPoint {
                year: current_year + offset,
                value: running.round(),
            });
            running *= historical_growth;
        }

        let projected_growth = 1.0 + seed.appreciation_rate;
        let mut running = seed.base_value;

        let mut projected = Vec::with_capacity(market.projection_years as usize + 1);
        for offset in 0..=(market.projection_years as i32) {
            projected.push(ProjectedPoint {
                year: current_year + offset,
                projected: running.round(),
                conservative: (running * market.conservative_factor).round(),
                optimistic: (running * market.optimistic_factor).round(),
            });
            running *= projected_growth;
        }

        Self {
            historical,
            projected,
        }
    }

    /// Projected value `years_ahead` years after the current year.
    pub fn projected_at(&self, years_ahead: usize) -> Option<f64> {
        self.projected.get(years_ahead).map(|p| p.projected)
    }
}
