//! Strategy evaluation multipliers and recommendation thresholds

use serde::{Deserialize, Serialize};

/// ARV multipliers, transaction costs, and decision thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyAssumptions {
    /// Value added per rehab dollar for a flip
    pub flip_rehab_multiplier: f64,

    /// Months of carrying costs assumed for a flip window
    pub flip_holding_months: u32,

    /// Selling costs as a fraction of ARV
    pub selling_cost_pct: f64,

    /// Value added per rehab dollar for a BRRR (more conservative than flip)
    pub brrr_rehab_multiplier: f64,

    /// Cash-out refinance loan-to-value
    pub refinance_ltv: f64,

    /// Buy-and-hold horizon in years
    pub hold_years: u32,

    /// Minimum flip ROI (%) for a fix-and-flip recommendation
    pub flip_roi_threshold: f64,

    /// Minimum BRRR cash-on-cash return (%) for a BRRR recommendation
    pub brrr_roi_threshold: f64,

    /// Minimum hold ROI (%) for a long-term-hold recommendation
    pub hold_roi_threshold: f64,

    /// Short-term profit must exceed long-term profit by this ratio for a
    /// short-term rental recommendation
    pub short_term_advantage_ratio: f64,
}

impl Default for StrategyAssumptions {
    fn default() -> Self {
        Self {
            flip_rehab_multiplier: 1.5,
            flip_holding_months: 6,
            selling_cost_pct: 0.06,
            brrr_rehab_multiplier: 1.3,
            refinance_ltv: 0.75,
            hold_years: 3,
            flip_roi_threshold: 25.0,
            brrr_roi_threshold: 20.0,
            hold_roi_threshold: 15.0,
            short_term_advantage_ratio: 1.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds_descend() {
        let strategy = StrategyAssumptions::default();
        assert!(strategy.flip_roi_threshold > strategy.brrr_roi_threshold);
        assert!(strategy.brrr_roi_threshold > strategy.hold_roi_threshold);
    }
}
