//! Recommendation selection
//!
//! An ordered rule chain over the strategy results; the first rule that
//! fires wins, and the final rule is a catch-all, so selection is total.

use serde::{Deserialize, Serialize};

use super::{RentalYearProjection, StrategyAnalysis};
use crate::assumptions::StrategyAssumptions;

/// The recommended course of action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendedStrategy {
    FixAndFlip,
    Brrr,
    LongTermHold,
    ShortTermRental,
    NotRecommended,
}

impl RecommendedStrategy {
    /// Display label matching the report output
    pub fn label(&self) -> &'static str {
        match self {
            RecommendedStrategy::FixAndFlip => "Fix & Flip",
            RecommendedStrategy::Brrr => "BRRR Strategy",
            RecommendedStrategy::LongTermHold => "Long-Term Hold",
            RecommendedStrategy::ShortTermRental => "Short-Term Rental",
            RecommendedStrategy::NotRecommended => "Not Recommended",
        }
    }
}

/// A recommendation with its supporting rationale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub strategy: RecommendedStrategy,
    pub rationale: String,
}

/// Apply the decision chain. Order matters: a strong flip beats a strong
/// BRRR beats a solid hold, and short-term rental is only suggested when
/// its year-1 profit clearly outruns long-term.
pub fn select(
    rehab_cost: f64,
    strategies: &StrategyAnalysis,
    rentals: &[RentalYearProjection],
    thresholds: &StrategyAssumptions,
) -> Recommendation {
    let year_one = rentals.first();
    let lt_profit = year_one.map(|r| r.long_term_profit).unwrap_or(0.0);
    let st_profit = year_one.map(|r| r.short_term_profit).unwrap_or(0.0);

    if rehab_cost > 0.0 && strategies.flip.roi > thresholds.flip_roi_threshold {
        Recommendation {
            strategy: RecommendedStrategy::FixAndFlip,
            rationale: format!(
                "Strong flip potential with {:.1}% ROI. Quick profit opportunity.",
                strategies.flip.roi
            ),
        }
    } else if rehab_cost > 0.0 && strategies.brrr.roi.exceeds(thresholds.brrr_roi_threshold) {
        Recommendation {
            strategy: RecommendedStrategy::Brrr,
            rationale: format!(
                "Excellent BRRR opportunity with {} cash-on-cash return. \
                 Recover most of your investment.",
                strategies.brrr.roi
            ),
        }
    } else if strategies.hold.roi > thresholds.hold_roi_threshold {
        Recommendation {
            strategy: RecommendedStrategy::LongTermHold,
            rationale: format!(
                "Solid buy-and-hold with {:.1}% total ROI over {} years. \
                 Strong appreciation and cash flow.",
                strategies.hold.roi, thresholds.hold_years
            ),
        }
    } else if st_profit > lt_profit * thresholds.short_term_advantage_ratio {
        Recommendation {
            strategy: RecommendedStrategy::ShortTermRental,
            rationale: "Short-term rental shows significantly better returns. \
                        Consider Airbnb strategy."
                .to_string(),
        }
    } else {
        Recommendation {
            strategy: RecommendedStrategy::NotRecommended,
            rationale: "Returns are below investment-grade thresholds. \
                        Consider other opportunities."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{BrrrResult, BrrrRoi, FlipResult, HoldResult};

    fn strategies(flip_roi: f64, brrr_roi: BrrrRoi, hold_roi: f64) -> StrategyAnalysis {
        StrategyAnalysis {
            flip: FlipResult {
                after_repair_value: 460_000.0,
                profit: 30_000.0,
                roi: flip_roi,
            },
            brrr: BrrrResult {
                after_repair_value: 452_000.0,
                refinance_amount: 339_000.0,
                cash_recovered: 19_000.0,
                cash_left_in_deal: 113_000.0,
                roi: brrr_roi,
            },
            hold: HoldResult {
                appreciation: 60_000.0,
                cash_flow: 5_000.0,
                total_return: 65_000.0,
                roi: hold_roi,
            },
        }
    }

    fn rentals(lt_profit: f64, st_profit: f64) -> Vec<RentalYearProjection> {
        (1..=3)
            .map(|year| RentalYearProjection {
                year,
                long_term_revenue: 30_000.0,
                long_term_profit: lt_profit,
                short_term_revenue: 45_000.0,
                short_term_profit: st_profit,
            })
            .collect()
    }

    #[test]
    fn test_flip_branch_wins_even_when_others_fail() {
        // Flip at 30% with rehab qualifies; BRRR and hold are both weak and
        // the chain must not fall through past the first match.
        let s = strategies(30.0, BrrrRoi::CashOnCash(5.0), 5.0);
        let rec = select(
            10_000.0,
            &s,
            &rentals(1_000.0, 1_200.0),
            &StrategyAssumptions::default(),
        );
        assert_eq!(rec.strategy, RecommendedStrategy::FixAndFlip);
        assert!(rec.rationale.contains("30.0%"));
    }

    #[test]
    fn test_flip_requires_rehab_budget() {
        // Same ROI figures with zero rehab skip both rehab-gated branches
        let s = strategies(30.0, BrrrRoi::CashOnCash(25.0), 20.0);
        let rec = select(
            0.0,
            &s,
            &rentals(1_000.0, 1_200.0),
            &StrategyAssumptions::default(),
        );
        assert_eq!(rec.strategy, RecommendedStrategy::LongTermHold);
    }

    #[test]
    fn test_brrr_branch() {
        let s = strategies(10.0, BrrrRoi::CashOnCash(22.0), 5.0);
        let rec = select(
            10_000.0,
            &s,
            &rentals(1_000.0, 1_200.0),
            &StrategyAssumptions::default(),
        );
        assert_eq!(rec.strategy, RecommendedStrategy::Brrr);
        assert!(rec.rationale.contains("22.0%"));
    }

    #[test]
    fn test_brrr_fully_recovered_passes_threshold() {
        let s = strategies(10.0, BrrrRoi::FullyRecovered, 5.0);
        let rec = select(
            10_000.0,
            &s,
            &rentals(1_000.0, 1_200.0),
            &StrategyAssumptions::default(),
        );
        assert_eq!(rec.strategy, RecommendedStrategy::Brrr);
        assert!(rec.rationale.contains("∞"));
    }

    #[test]
    fn test_hold_branch() {
        let s = strategies(10.0, BrrrRoi::CashOnCash(5.0), 18.0);
        let rec = select(
            10_000.0,
            &s,
            &rentals(1_000.0, 1_200.0),
            &StrategyAssumptions::default(),
        );
        assert_eq!(rec.strategy, RecommendedStrategy::LongTermHold);
        assert!(rec.rationale.contains("18.0%"));
    }

    #[test]
    fn test_short_term_branch() {
        let s = strategies(10.0, BrrrRoi::CashOnCash(5.0), 5.0);
        let rec = select(
            0.0,
            &s,
            &rentals(1_000.0, 2_000.0),
            &StrategyAssumptions::default(),
        );
        assert_eq!(rec.strategy, RecommendedStrategy::ShortTermRental);
    }

    #[test]
    fn test_catch_all() {
        let s = strategies(10.0, BrrrRoi::CashOnCash(5.0), 5.0);
        let rec = select(
            0.0,
            &s,
            &rentals(1_000.0, 1_200.0),
            &StrategyAssumptions::default(),
        );
        assert_eq!(rec.strategy, RecommendedStrategy::NotRecommended);
        assert!(rec.rationale.contains("below investment-grade"));
    }

    #[test]
    fn test_negative_long_term_profit_gates_short_term() {
        // With a negative long-term year, 1.5x of it is a lower bar, so a
        // smaller short-term loss still counts as "better"
        let s = strategies(10.0, BrrrRoi::CashOnCash(5.0), 5.0);
        let rec = select(
            0.0,
            &s,
            &rentals(-2_000.0, -1_000.0),
            &StrategyAssumptions::default(),
        );
        assert_eq!(rec.strategy, RecommendedStrategy::ShortTermRental);
    }

    #[test]
    fn test_strategy_labels() {
        assert_eq!(RecommendedStrategy::FixAndFlip.label(), "Fix & Flip");
        assert_eq!(RecommendedStrategy::NotRecommended.label(), "Not Recommended");
    }
}
