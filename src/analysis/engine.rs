//! Core analysis engine running the full valuation-and-strategy pipeline

use chrono::Datelike;
use log::debug;

use super::{
    recommendation, AnalysisResult, CostBreakdown, PropertyOverview, StrategyAnalysis,
    ValuationSeed, ValueTimeline,
};
use super::rental::project_rentals;
use crate::assumptions::Assumptions;
use crate::property::{InvalidInput, PropertyInput};
use crate::random::RandomSource;

/// Configuration for an analysis run
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Calendar year anchoring the value timeline
    pub current_year: i32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            current_year: chrono::Utc::now().year(),
        }
    }
}

/// Main analysis engine.
///
/// One synchronous computation per call; no state survives between runs
/// apart from the caller-owned random source.
pub struct AnalysisEngine {
    assumptions: Assumptions,
    config: AnalysisConfig,
}

impl AnalysisEngine {
    /// Create a new engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: AnalysisConfig) -> Self {
        Self {
            assumptions,
            config,
        }
    }

    /// Run the full pipeline for one property.
    ///
    /// Fails only on invalid input, before any computation runs.
    pub fn analyze(
        &self,
        input: &PropertyInput,
        rng: &mut dyn RandomSource,
    ) -> Result<AnalysisResult, InvalidInput> {
        input.validate()?;

        let seed = ValuationSeed::draw(rng, &self.assumptions.market);
        debug!(
            "seed: base_value={:.0} appreciation_rate={:.4}",
            seed.base_value, seed.appreciation_rate
        );

        let timeline =
            ValueTimeline::build(&seed, &self.assumptions.market, self.config.current_year);

        let costs = CostBreakdown::compute(
            seed.base_value,
            input.rehab_cost,
            &self.assumptions.financing,
        );
        debug!(
            "costs: total_initial={:.0} total_monthly={:.2}",
            costs.total_initial_investment, costs.total_monthly_cost
        );

        let rentals = project_rentals(
            seed.base_value,
            costs.total_monthly_cost,
            &self.assumptions.rental,
        );

        let strategies = StrategyAnalysis::evaluate(
            &seed,
            input.rehab_cost,
            &costs,
            &rentals,
            &timeline,
            &self.assumptions.strategy,
        );

        let recommendation = recommendation::select(
            input.rehab_cost,
            &strategies,
            &rentals,
            &self.assumptions.strategy,
        );
        debug!("recommendation: {:?}", recommendation.strategy);

        Ok(AnalysisResult {
            property: PropertyOverview {
                address: input.address(),
                current_value: seed.base_value,
                appreciation_rate: seed.appreciation_rate,
            },
            seed,
            timeline,
            costs,
            rentals,
            strategies,
            recommendation,
        })
    }
}
