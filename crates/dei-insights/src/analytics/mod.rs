//! Diversity metric synthesis, scorecards, peer benchmarks, and intervention ROI.
//!
//! Every operation here is a pure function over its arguments. Synthesis owns a freshly seeded
//! generator per call so datasets are reproducible from the seed alone.

pub mod benchmark;
pub mod domain;
pub mod impact;
pub mod overview;
pub mod router;
pub mod scorecard;
pub mod synthesizer;
pub mod templates;

#[cfg(test)]
mod tests;

pub use benchmark::{
    benchmark_from_dataset, compare_entities, find_record, BenchmarkComparison, BenchmarkTriplet,
};
pub use domain::{AnalyticsError, MetricBounds, OrganizationMetrics, ScorecardMetric};
pub use impact::{simulate_impact, ImpactAssumptions, ImpactProjection, LAKH};
pub use overview::IndustryOverview;
pub use router::analytics_router;
pub use scorecard::{
    compute_scorecard, RawTargets, Scorecard, ScorecardEntry, ScorecardTargets,
};
pub use synthesizer::{synthesize, synthesize_default, DEFAULT_ORGANIZATIONS};
pub use templates::AnalysisKind;
