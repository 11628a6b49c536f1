//! Valuation-and-strategy computation pipeline
//!
//! Data flows strictly forward: seed -> timeline -> financing -> rentals
//! -> strategies -> recommendation. No stage reads back from a later one.

mod seed;
mod timeline;
mod financing;
mod rental;
mod strategy;
mod recommendation;
mod result;
mod engine;

pub use seed::ValuationSeed;
pub use timeline::{ValueTimeline, HistoricalPoint, ProjectedPoint};
pub use financing::CostBreakdown;
pub use rental::{RentalYearProjection, project_rentals};
pub use strategy::{StrategyAnalysis, FlipResult, BrrrResult, HoldResult, BrrrRoi};
pub use recommendation::{Recommendation, RecommendedStrategy};
pub use result::{AnalysisResult, PropertyOverview, AnalysisSummary};
pub use engine::{AnalysisEngine, AnalysisConfig};
