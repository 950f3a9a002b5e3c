use super::domain::AnalyticsError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Currency units per lakh.
pub const LAKH: f64 = 100_000.0;
pub const DEFAULT_BASE_SALARY_LAKHS: f64 = 12.0;

const HIRING_COST_MULTIPLIER: f64 = 0.30;
const TURNOVER_COST_MULTIPLIER: f64 = 1.50;
const PRODUCTIVITY_FACTOR: f64 = 0.15;

/// Intervention assumptions supplied by the decision maker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactAssumptions {
    pub diversity_increase_pct: f64,
    pub inclusion_improvement_pts: f64,
    pub retention_improvement_pct: f64,
    pub budget_lakhs: f64,
    pub employee_count: u32,
    /// Falls back to the configured salary when omitted.
    #[serde(default)]
    pub base_salary_lakhs: Option<f64>,
}

/// Benefit breakdown in lakhs, with ROI against the invested budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactProjection {
    pub hiring_cost_per_head: f64,
    pub turnover_cost_per_head: f64,
    pub reduced_turnover_benefit: f64,
    pub hiring_savings_benefit: f64,
    pub productivity_gain_benefit: f64,
    pub total_benefit: f64,
    pub invested_amount: f64,
    pub roi_percent: f64,
}

impl ImpactProjection {
    pub fn total_benefit_currency(&self) -> f64 {
        self.total_benefit * LAKH
    }

    pub fn invested_amount_currency(&self) -> f64 {
        self.invested_amount * LAKH
    }

    pub fn net_benefit(&self) -> f64 {
        self.total_benefit - self.invested_amount
    }

    /// Labelled benefit components for a breakdown chart.
    pub fn components(&self) -> [(&'static str, f64); 3] {
        [
            ("Reduced Turnover", self.reduced_turnover_benefit),
            ("Hiring Savings", self.hiring_savings_benefit),
            ("Productivity Gain", self.productivity_gain_benefit),
        ]
    }
}

impl ImpactAssumptions {
    pub fn simulate(&self) -> Result<ImpactProjection, AnalyticsError> {
        self.simulate_with_default_salary(DEFAULT_BASE_SALARY_LAKHS)
    }

    pub fn simulate_with_default_salary(
        &self,
        default_base_salary_lakhs: f64,
    ) -> Result<ImpactProjection, AnalyticsError> {
        simulate_impact(
            self.diversity_increase_pct,
            self.inclusion_improvement_pts,
            self.retention_improvement_pct,
            self.budget_lakhs,
            self.employee_count,
            self.base_salary_lakhs.unwrap_or(default_base_salary_lakhs),
        )
    }
}

/// Project the financial impact of a DEI intervention.
///
/// Inputs are rejected rather than coerced: a zero budget fails with
/// [`AnalyticsError::DivisionByZero`] before any other check, and negative or non-finite
/// percentages, a zero headcount, a negative budget, a non-positive salary, or inputs so extreme
/// that the benefit or ROI is not a finite number fail with [`AnalyticsError::InvalidInput`].
pub fn simulate_impact(
    diversity_increase_pct: f64,
    inclusion_improvement_pts: f64,
    retention_improvement_pct: f64,
    budget_lakhs: f64,
    employee_count: u32,
    base_salary_lakhs: f64,
) -> Result<ImpactProjection, AnalyticsError> {
    if budget_lakhs == 0.0 {
        return Err(AnalyticsError::DivisionByZero(
            "ROI is undefined for a zero budget",
        ));
    }

    ensure_non_negative("diversity_increase_pct", diversity_increase_pct)?;
    ensure_non_negative("inclusion_improvement_pts", inclusion_improvement_pts)?;
    ensure_non_negative("retention_improvement_pct", retention_improvement_pct)?;
    if !budget_lakhs.is_finite() || budget_lakhs < 0.0 {
        return Err(AnalyticsError::InvalidInput(format!(
            "budget_lakhs must be positive, got {budget_lakhs}"
        )));
    }
    if employee_count == 0 {
        return Err(AnalyticsError::InvalidInput(
            "employee_count must be positive".to_string(),
        ));
    }
    if !base_salary_lakhs.is_finite() || base_salary_lakhs <= 0.0 {
        return Err(AnalyticsError::InvalidInput(format!(
            "base_salary_lakhs must be positive, got {base_salary_lakhs}"
        )));
    }

    let employees = f64::from(employee_count);
    let hiring_cost_per_head = HIRING_COST_MULTIPLIER * base_salary_lakhs;
    let turnover_cost_per_head = TURNOVER_COST_MULTIPLIER * base_salary_lakhs;

    let reduced_turnover_benefit =
        employees * (retention_improvement_pct / 100.0) * turnover_cost_per_head;
    let hiring_savings_benefit =
        employees * (diversity_increase_pct / 100.0) * hiring_cost_per_head;
    let productivity_gain_benefit = employees
        * (inclusion_improvement_pts / 100.0)
        * base_salary_lakhs
        * PRODUCTIVITY_FACTOR;
    let total_benefit =
        reduced_turnover_benefit + hiring_savings_benefit + productivity_gain_benefit;

    let benefit_currency = total_benefit * LAKH;
    let invested_currency = budget_lakhs * LAKH;
    let roi_percent = (benefit_currency - invested_currency) / invested_currency * 100.0;

    if !total_benefit.is_finite() || !roi_percent.is_finite() {
        return Err(AnalyticsError::InvalidInput(format!(
            "inputs overflow the projection (total benefit {total_benefit}, ROI {roi_percent})"
        )));
    }

    debug!(
        employee_count,
        budget_lakhs, total_benefit, roi_percent, "simulated intervention impact"
    );

    Ok(ImpactProjection {
        hiring_cost_per_head,
        turnover_cost_per_head,
        reduced_turnover_benefit,
        hiring_savings_benefit,
        productivity_gain_benefit,
        total_benefit,
        invested_amount: budget_lakhs,
        roi_percent,
    })
}

fn ensure_non_negative(field: &str, value: f64) -> Result<(), AnalyticsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AnalyticsError::InvalidInput(format!(
            "{field} must be a non-negative number, got {value}"
        )))
    }
}
