use super::domain::{
    AnalyticsError, OrganizationMetrics, GENDER_DIVERSITY_BOUNDS, INCLUSION_SURVEY_BOUNDS,
    LEADERSHIP_DIVERSITY_BOUNDS, PAY_EQUITY_BOUNDS, PROMOTION_RATE_BOUNDS, RETENTION_RATE_BOUNDS,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use std::collections::HashSet;
use std::ops::Range;
use tracing::{debug, warn};

/// Organization roster used when the caller does not supply one.
pub const DEFAULT_ORGANIZATIONS: [&str; 6] = [
    "TechMahindra",
    "Infosys",
    "TCS",
    "Wipro",
    "HCL",
    "Accenture",
];

pub const DEFAULT_REGION: &str = "India";

const BASE_AFFINITY_MEAN: f64 = 0.65;
const BASE_AFFINITY_STD_DEV: f64 = 0.15;

const HEADCOUNT_CHOICES: [u32; 4] = [50_000, 100_000, 250_000, 500_000];
const REVENUE_CRORES_RANGE: Range<f64> = 5_000.0..250_000.0;
const DEI_BUDGET_PCT_RANGE: Range<f64> = 0.5..3.0;

/// Generate one record per distinct organization name from a generator seeded with `seed`.
///
/// Each call owns its generator, so identical `(seed, names)` inputs always produce identical
/// output. Draws happen per organization in caller order: base affinity, headcount, revenue,
/// budget percentage. Duplicate names keep their first occurrence and consume no draws.
pub fn synthesize<S: AsRef<str>>(
    seed: u64,
    organization_names: &[S],
) -> Result<Vec<OrganizationMetrics>, AnalyticsError> {
    if organization_names.is_empty() {
        return Err(AnalyticsError::InvalidInput(
            "at least one organization name is required".to_string(),
        ));
    }

    let affinity = Normal::new(BASE_AFFINITY_MEAN, BASE_AFFINITY_STD_DEV)
        .map_err(|err| AnalyticsError::InvalidConfig(format!("base affinity: {err}")))?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut seen = HashSet::with_capacity(organization_names.len());
    let mut records = Vec::with_capacity(organization_names.len());

    for name in organization_names {
        let name = name.as_ref();
        if !seen.insert(name) {
            warn!(organization = name, "duplicate organization name ignored");
            continue;
        }

        let base = affinity.sample(&mut rng);
        let employee_count = HEADCOUNT_CHOICES[rng.gen_range(0..HEADCOUNT_CHOICES.len())];
        let revenue_crores = rng.gen_range(REVENUE_CRORES_RANGE);
        let dei_budget_pct = rng.gen_range(DEI_BUDGET_PCT_RANGE);

        records.push(derive_record(
            name,
            base,
            employee_count,
            revenue_crores,
            dei_budget_pct,
        ));
    }

    debug!(seed, organizations = records.len(), "synthesized diversity dataset");
    Ok(records)
}

/// Synthesize the default roster.
pub fn synthesize_default(seed: u64) -> Result<Vec<OrganizationMetrics>, AnalyticsError> {
    synthesize(seed, &DEFAULT_ORGANIZATIONS)
}

pub(crate) fn derive_record(
    name: &str,
    base: f64,
    employee_count: u32,
    revenue_crores: f64,
    dei_budget_pct: f64,
) -> OrganizationMetrics {
    OrganizationMetrics {
        name: name.to_string(),
        region: DEFAULT_REGION.to_string(),
        gender_diversity: GENDER_DIVERSITY_BOUNDS.clamp(base),
        leadership_diversity: LEADERSHIP_DIVERSITY_BOUNDS.clamp(base - 0.15),
        pay_equity_score: PAY_EQUITY_BOUNDS.clamp(base + 0.10),
        inclusion_survey_score: INCLUSION_SURVEY_BOUNDS.clamp(base * 5.0 + 2.0),
        retention_rate_diverse: RETENTION_RATE_BOUNDS.clamp(base + 0.20),
        promotion_rate_diverse: PROMOTION_RATE_BOUNDS.clamp(base * 0.30),
        employee_count,
        revenue_crores,
        dei_budget_pct,
    }
}
