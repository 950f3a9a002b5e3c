use super::domain::{AnalyticsError, OrganizationMetrics, ScorecardMetric};
use super::scorecard::{compute_scorecard, Scorecard, ScorecardTargets};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Focal scorecard plus one scorecard per distinct peer, in caller order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub focal: Scorecard,
    pub comparisons: Vec<Scorecard>,
}

/// A single point on a side-by-side chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkTriplet {
    pub organization: String,
    pub metric: ScorecardMetric,
    pub focal_value: f64,
    pub comparison_value: f64,
}

impl BenchmarkComparison {
    pub fn comparison(&self, organization: &str) -> Option<&Scorecard> {
        self.comparisons
            .iter()
            .find(|scorecard| scorecard.organization == organization)
    }

    pub fn organizations(&self) -> Vec<&str> {
        self.comparisons
            .iter()
            .map(|scorecard| scorecard.organization.as_str())
            .collect()
    }

    /// Ordered by comparison organization first, then metric.
    pub fn triplets(&self) -> Vec<BenchmarkTriplet> {
        self.comparisons
            .iter()
            .flat_map(|scorecard| {
                scorecard.entries.iter().filter_map(move |entry| {
                    self.focal.entry(entry.metric).map(|focal| BenchmarkTriplet {
                        organization: scorecard.organization.clone(),
                        metric: entry.metric,
                        focal_value: focal.value,
                        comparison_value: entry.value,
                    })
                })
            })
            .collect()
    }
}

/// Score the focal organization and each peer. The focal organization never appears among its
/// own peers and repeated peer names keep their first occurrence.
pub fn compare_entities(
    focal: &OrganizationMetrics,
    comparisons: &[OrganizationMetrics],
    targets: &ScorecardTargets,
) -> BenchmarkComparison {
    let mut seen: HashSet<&str> = HashSet::with_capacity(comparisons.len() + 1);
    seen.insert(focal.name.as_str());

    let comparisons = comparisons
        .iter()
        .filter(|record| seen.insert(record.name.as_str()))
        .map(|record| compute_scorecard(record, targets))
        .collect();

    BenchmarkComparison {
        focal: compute_scorecard(focal, targets),
        comparisons,
    }
}

/// Resolve records by name from a synthesized dataset, then compare them.
pub fn benchmark_from_dataset<S: AsRef<str>>(
    dataset: &[OrganizationMetrics],
    focal_name: &str,
    comparison_names: &[S],
    targets: &ScorecardTargets,
) -> Result<BenchmarkComparison, AnalyticsError> {
    let focal = find_record(dataset, focal_name)?;
    let comparisons = comparison_names
        .iter()
        .map(|name| find_record(dataset, name.as_ref()).cloned())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(compare_entities(focal, &comparisons, targets))
}

pub fn find_record<'a>(
    dataset: &'a [OrganizationMetrics],
    name: &str,
) -> Result<&'a OrganizationMetrics, AnalyticsError> {
    dataset
        .iter()
        .find(|record| record.name == name)
        .ok_or_else(|| AnalyticsError::InvalidInput(format!("unknown organization '{name}'")))
}
