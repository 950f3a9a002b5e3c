mod targets;

pub use targets::{RawTargets, ScorecardTargets};

use super::domain::{OrganizationMetrics, ScorecardMetric};
use serde::{Deserialize, Serialize};

/// One metric of a scorecard, scaled to 0-100 alongside its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardEntry {
    pub metric: ScorecardMetric,
    pub label: String,
    pub value: f64,
    pub target: f64,
    pub gap: f64,
}

impl ScorecardEntry {
    pub fn meets_target(&self) -> bool {
        self.gap >= 0.0
    }
}

/// Per-metric comparison of one organization against the configured targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorecard {
    pub organization: String,
    pub entries: Vec<ScorecardEntry>,
}

impl Scorecard {
    pub fn entry(&self, metric: ScorecardMetric) -> Option<&ScorecardEntry> {
        self.entries.iter().find(|entry| entry.metric == metric)
    }

    /// Entries that fall short of their target, largest shortfall first.
    pub fn shortfalls(&self) -> Vec<&ScorecardEntry> {
        let mut shortfalls: Vec<&ScorecardEntry> = self
            .entries
            .iter()
            .filter(|entry| !entry.meets_target())
            .collect();
        shortfalls.sort_by(|a, b| a.gap.total_cmp(&b.gap));
        shortfalls
    }
}

/// Score `record` against `targets`. One entry per configured target, in canonical order.
pub fn compute_scorecard(record: &OrganizationMetrics, targets: &ScorecardTargets) -> Scorecard {
    let entries = targets
        .iter()
        .map(|(metric, target)| {
            let value = record.scorecard_fraction(metric) * 100.0;
            let target = target * 100.0;
            ScorecardEntry {
                metric,
                label: metric.label().to_string(),
                value,
                target,
                gap: value - target,
            }
        })
        .collect();

    Scorecard {
        organization: record.name.clone(),
        entries,
    }
}
