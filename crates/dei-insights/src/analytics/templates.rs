use serde::{Deserialize, Serialize};

/// Canned narrative blocks shown beside the charts. Static text only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    ExecutiveSummary,
    GapAnalysis,
    Recommendations,
}

impl AnalysisKind {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::ExecutiveSummary,
            Self::GapAnalysis,
            Self::Recommendations,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::ExecutiveSummary => "executive_summary",
            Self::GapAnalysis => "gap_analysis",
            Self::Recommendations => "recommendations",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ExecutiveSummary => "Executive Summary",
            Self::GapAnalysis => "Gap Analysis",
            Self::Recommendations => "Recommendations",
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
        Self::ordered()
            .into_iter()
            .find(|kind| kind.key() == normalized)
    }

    pub const fn template(self) -> &'static str {
        match self {
            Self::ExecutiveSummary => {
                "Representation is improving at entry level but narrows sharply in leadership. \
                 Pay equity is broadly on target while inclusion sentiment trails the benchmark."
            }
            Self::GapAnalysis => {
                "The largest gaps sit in leadership diversity and inclusion. Gender representation \
                 and pay equity are within reach of their targets for most organizations."
            }
            Self::Recommendations => {
                "Prioritize sponsorship programs for mid-level talent, audit promotion criteria, \
                 and tie manager goals to inclusion survey results."
            }
        }
    }
}
