//! Batch runner for repeated analyses
//!
//! Holds pre-built assumptions and config so sweeps over many seeds or
//! many properties do not rebuild anything per run.

use crate::analysis::{AnalysisConfig, AnalysisEngine, AnalysisResult};
use crate::assumptions::Assumptions;
use crate::property::{InvalidInput, PropertyInput};
use crate::random::{RandomSource, SplitMix64};

/// Pre-loaded runner for batch analysis
///
/// # Example
/// ```ignore
/// let runner = AnalysisRunner::new();
/// for seed in 0..1000 {
///     let result = runner.run_with_seed(&input, seed)?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisRunner {
    assumptions: Assumptions,
    config: AnalysisConfig,
}

impl AnalysisRunner {
    /// Create a runner with default assumptions and the current year
    pub fn new() -> Self {
        Self {
            assumptions: Assumptions::default(),
            config: AnalysisConfig::default(),
        }
    }

    /// Create a runner with pre-built assumptions and config
    pub fn with_assumptions(assumptions: Assumptions, config: AnalysisConfig) -> Self {
        Self {
            assumptions,
            config,
        }
    }

    /// Run one analysis with the given random source
    pub fn run(
        &self,
        input: &PropertyInput,
        rng: &mut dyn RandomSource,
    ) -> Result<AnalysisResult, InvalidInput> {
        let engine = AnalysisEngine::new(self.assumptions.clone(), self.config.clone());
        engine.analyze(input, rng)
    }

    /// Run one analysis with a deterministic generator seed
    pub fn run_with_seed(
        &self,
        input: &PropertyInput,
        seed: u64,
    ) -> Result<AnalysisResult, InvalidInput> {
        let mut rng = SplitMix64::seeded(seed);
        self.run(input, &mut rng)
    }

    /// Run one property across many generator seeds
    pub fn run_seed_sweep(
        &self,
        input: &PropertyInput,
        seeds: &[u64],
    ) -> Result<Vec<AnalysisResult>, InvalidInput> {
        seeds
            .iter()
            .map(|&seed| self.run_with_seed(input, seed))
            .collect()
    }

    /// Get reference to the assumptions for inspection/modification
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Get mutable reference to the assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.assumptions
    }
}

impl Default for AnalysisRunner {
    fn default() -> Self {
        Self::new()
    }
}
