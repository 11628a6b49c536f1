//! Complete analysis output

use serde::{Deserialize, Serialize};

use super::{
    CostBreakdown, Recommendation, RentalYearProjection, StrategyAnalysis, ValuationSeed,
    ValueTimeline,
};

/// Headline facts about the analyzed property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyOverview {
    /// Single-line display address
    pub address: String,

    /// Estimated current market value
    pub current_value: f64,

    /// Annual appreciation rate as a fraction
    pub appreciation_rate: f64,
}

/// Everything the engine produces for one submitted property.
///
/// Built atomically; a failed analysis produces no partial result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub property: PropertyOverview,
    pub seed: ValuationSeed,
    pub timeline: ValueTimeline,
    pub costs: CostBreakdown,
    pub rentals: Vec<RentalYearProjection>,
    pub strategies: StrategyAnalysis,
    pub recommendation: Recommendation,
}

impl AnalysisResult {
    /// Headline summary figures
    pub fn summary(&self) -> AnalysisSummary {
        let total_long_term_profit: f64 =
            self.rentals.iter().map(|r| r.long_term_profit).sum();
        let total_short_term_profit: f64 =
            self.rentals.iter().map(|r| r.short_term_profit).sum();

        let final_projected_value = self
            .timeline
            .projected
            .last()
            .map(|p| p.projected)
            .unwrap_or(self.seed.base_value);

        AnalysisSummary {
            rental_years: self.rentals.len() as u32,
            total_long_term_profit,
            total_short_term_profit,
            final_projected_value,
        }
    }
}

/// Summary statistics for an analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub rental_years: u32,
    pub total_long_term_profit: f64,
    pub total_short_term_profit: f64,
    /// Projected value at the end of the forward timeline
    pub final_projected_value: f64,
}
