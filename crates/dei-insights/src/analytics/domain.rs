use serde::{Deserialize, Serialize};

/// Closed interval a synthesized metric is clamped into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricBounds {
    pub min: f64,
    pub max: f64,
}

impl MetricBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const GENDER_DIVERSITY_BOUNDS: MetricBounds = MetricBounds::new(0.15, 0.85);
pub const LEADERSHIP_DIVERSITY_BOUNDS: MetricBounds = MetricBounds::new(0.10, 0.70);
pub const PAY_EQUITY_BOUNDS: MetricBounds = MetricBounds::new(0.60, 0.98);
pub const INCLUSION_SURVEY_BOUNDS: MetricBounds = MetricBounds::new(3.0, 5.0);
pub const RETENTION_RATE_BOUNDS: MetricBounds = MetricBounds::new(0.70, 0.95);
pub const PROMOTION_RATE_BOUNDS: MetricBounds = MetricBounds::new(0.08, 0.25);

/// Upper end of the inclusion survey scale; used to normalize scores to a fraction.
pub const INCLUSION_SCALE_MAX: f64 = 5.0;

/// One synthesized organization and its diversity metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationMetrics {
    pub name: String,
    pub region: String,
    pub gender_diversity: f64,
    pub leadership_diversity: f64,
    pub pay_equity_score: f64,
    pub inclusion_survey_score: f64,
    pub retention_rate_diverse: f64,
    pub promotion_rate_diverse: f64,
    pub employee_count: u32,
    pub revenue_crores: f64,
    pub dei_budget_pct: f64,
}

impl OrganizationMetrics {
    pub fn inclusion_normalized(&self) -> f64 {
        self.inclusion_survey_score / INCLUSION_SCALE_MAX
    }

    /// Raw fraction for a scorecard metric, before scaling to 0-100.
    pub fn scorecard_fraction(&self, metric: ScorecardMetric) -> f64 {
        match metric {
            ScorecardMetric::GenderDiversity => self.gender_diversity,
            ScorecardMetric::LeadershipDiversity => self.leadership_diversity,
            ScorecardMetric::PayEquityScore => self.pay_equity_score,
            ScorecardMetric::InclusionNormalized => self.inclusion_normalized(),
        }
    }

    /// True when every bounded field sits inside its declared interval.
    pub fn within_bounds(&self) -> bool {
        GENDER_DIVERSITY_BOUNDS.contains(self.gender_diversity)
            && LEADERSHIP_DIVERSITY_BOUNDS.contains(self.leadership_diversity)
            && PAY_EQUITY_BOUNDS.contains(self.pay_equity_score)
            && INCLUSION_SURVEY_BOUNDS.contains(self.inclusion_survey_score)
            && RETENTION_RATE_BOUNDS.contains(self.retention_rate_diverse)
            && PROMOTION_RATE_BOUNDS.contains(self.promotion_rate_diverse)
            && self.employee_count > 0
            && self.revenue_crores >= 0.0
            && self.dei_budget_pct >= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorecardMetric {
    GenderDiversity,
    LeadershipDiversity,
    PayEquityScore,
    InclusionNormalized,
}

impl ScorecardMetric {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::GenderDiversity,
            Self::LeadershipDiversity,
            Self::PayEquityScore,
            Self::InclusionNormalized,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::GenderDiversity => "gender_diversity",
            Self::LeadershipDiversity => "leadership_diversity",
            Self::PayEquityScore => "pay_equity_score",
            Self::InclusionNormalized => "inclusion_normalized",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::GenderDiversity => "Gender Diversity",
            Self::LeadershipDiversity => "Leadership Diversity",
            Self::PayEquityScore => "Pay Equity",
            Self::InclusionNormalized => "Inclusion",
        }
    }

    pub const fn default_target(self) -> f64 {
        match self {
            Self::GenderDiversity => 0.40,
            Self::LeadershipDiversity => 0.30,
            Self::PayEquityScore => 0.90,
            Self::InclusionNormalized => 0.80,
        }
    }

    /// Accepts the snake_case key, ignoring surrounding whitespace and ASCII case.
    pub fn from_key(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|metric| metric.key() == normalized)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalyticsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),
}
