use super::domain::{AnalyticsError, OrganizationMetrics};
use serde::Serialize;

/// Dataset-wide headline figures for the dashboard landing view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryOverview {
    pub organization_count: usize,
    pub avg_gender_diversity: f64,
    pub avg_pay_equity: f64,
    pub avg_inclusion_score: f64,
    pub total_employees: u64,
}

impl IndustryOverview {
    pub fn from_records(records: &[OrganizationMetrics]) -> Result<Self, AnalyticsError> {
        if records.is_empty() {
            return Err(AnalyticsError::InvalidInput(
                "cannot summarize an empty dataset".to_string(),
            ));
        }

        let count = records.len() as f64;
        let mean = |field: fn(&OrganizationMetrics) -> f64| {
            records.iter().map(field).sum::<f64>() / count
        };

        Ok(Self {
            organization_count: records.len(),
            avg_gender_diversity: mean(|record| record.gender_diversity),
            avg_pay_equity: mean(|record| record.pay_equity_score),
            avg_inclusion_score: mean(|record| record.inclusion_survey_score),
            total_employees: records
                .iter()
                .map(|record| u64::from(record.employee_count))
                .sum(),
        })
    }
}
