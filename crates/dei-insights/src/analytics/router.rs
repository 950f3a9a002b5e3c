use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::benchmark::{benchmark_from_dataset, find_record, BenchmarkTriplet};
use super::domain::OrganizationMetrics;
use super::impact::{ImpactAssumptions, ImpactProjection};
use super::overview::IndustryOverview;
use super::scorecard::{compute_scorecard, RawTargets, Scorecard, ScorecardTargets};
use super::synthesizer::{synthesize, DEFAULT_ORGANIZATIONS};
use super::templates::AnalysisKind;
use crate::config::AnalyticsConfig;
use crate::error::AppError;

/// Dataset selection shared by every dataset-backed request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatasetSelection {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub organizations: Option<Vec<String>>,
}

impl DatasetSelection {
    /// Resolve the seed and roster against the configured defaults, then synthesize.
    pub fn materialize(
        &self,
        defaults: &AnalyticsConfig,
    ) -> Result<(u64, Vec<OrganizationMetrics>), AppError> {
        let seed = self.seed.unwrap_or(defaults.default_seed);
        let records = match &self.organizations {
            Some(names) => synthesize(seed, names)?,
            None => synthesize(seed, &DEFAULT_ORGANIZATIONS)?,
        };
        Ok((seed, records))
    }
}

#[derive(Debug, Serialize)]
pub struct DatasetResponse {
    pub seed: u64,
    pub generated_at: DateTime<Utc>,
    pub overview: IndustryOverview,
    pub records: Vec<OrganizationMetrics>,
}

#[derive(Debug, Deserialize)]
pub struct ScorecardRequest {
    #[serde(flatten)]
    pub dataset: DatasetSelection,
    pub organization: String,
    #[serde(default)]
    pub targets: Option<RawTargets>,
}

#[derive(Debug, Serialize)]
pub struct ScorecardResponse {
    pub seed: u64,
    pub targets: ScorecardTargets,
    pub scorecard: Scorecard,
}

#[derive(Debug, Deserialize)]
pub struct BenchmarkRequest {
    #[serde(flatten)]
    pub dataset: DatasetSelection,
    pub focal: String,
    #[serde(default)]
    pub comparisons: Vec<String>,
    #[serde(default)]
    pub targets: Option<RawTargets>,
}

#[derive(Debug, Serialize)]
pub struct BenchmarkResponse {
    pub seed: u64,
    pub focal: Scorecard,
    pub comparisons: Vec<Scorecard>,
    pub triplets: Vec<BenchmarkTriplet>,
}

#[derive(Debug, Serialize)]
pub struct ImpactResponse {
    pub projection: ImpactProjection,
    pub total_benefit_currency: f64,
    pub invested_amount_currency: f64,
    pub net_benefit: f64,
}

/// Router exposing the analytics engine as JSON endpoints.
pub fn analytics_router(defaults: AnalyticsConfig) -> Router {
    Router::new()
        .route("/api/v1/dataset", post(dataset_handler))
        .route("/api/v1/scorecard", post(scorecard_handler))
        .route("/api/v1/benchmark", post(benchmark_handler))
        .route("/api/v1/impact", post(impact_handler))
        .route("/api/v1/analysis/:kind", get(analysis_handler))
        .with_state(Arc::new(defaults))
}

pub(crate) async fn dataset_handler(
    State(defaults): State<Arc<AnalyticsConfig>>,
    Json(selection): Json<DatasetSelection>,
) -> Result<Json<DatasetResponse>, AppError> {
    let (seed, records) = selection.materialize(&defaults)?;
    let overview = IndustryOverview::from_records(&records)?;

    Ok(Json(DatasetResponse {
        seed,
        generated_at: Utc::now(),
        overview,
        records,
    }))
}

pub(crate) async fn scorecard_handler(
    State(defaults): State<Arc<AnalyticsConfig>>,
    Json(request): Json<ScorecardRequest>,
) -> Result<Json<ScorecardResponse>, AppError> {
    let (seed, records) = request.dataset.materialize(&defaults)?;
    let targets = resolve_targets(request.targets)?;
    let record = find_record(&records, &request.organization)?;
    let scorecard = compute_scorecard(record, &targets);

    Ok(Json(ScorecardResponse {
        seed,
        targets,
        scorecard,
    }))
}

pub(crate) async fn benchmark_handler(
    State(defaults): State<Arc<AnalyticsConfig>>,
    Json(request): Json<BenchmarkRequest>,
) -> Result<Json<BenchmarkResponse>, AppError> {
    let (seed, records) = request.dataset.materialize(&defaults)?;
    let targets = resolve_targets(request.targets)?;
    let comparison =
        benchmark_from_dataset(&records, &request.focal, &request.comparisons, &targets)?;
    let triplets = comparison.triplets();

    Ok(Json(BenchmarkResponse {
        seed,
        focal: comparison.focal,
        comparisons: comparison.comparisons,
        triplets,
    }))
}

pub(crate) async fn impact_handler(
    State(defaults): State<Arc<AnalyticsConfig>>,
    Json(assumptions): Json<ImpactAssumptions>,
) -> Result<Json<ImpactResponse>, AppError> {
    let projection = assumptions.simulate_with_default_salary(defaults.base_salary_lakhs)?;

    Ok(Json(ImpactResponse {
        total_benefit_currency: projection.total_benefit_currency(),
        invested_amount_currency: projection.invested_amount_currency(),
        net_benefit: projection.net_benefit(),
        projection,
    }))
}

fn resolve_targets(raw: Option<RawTargets>) -> Result<ScorecardTargets, AppError> {
    match raw {
        Some(raw) => Ok(raw.validate()?),
        None => Ok(ScorecardTargets::default()),
    }
}

pub(crate) async fn analysis_handler(Path(kind): Path<String>) -> Response {
    match AnalysisKind::from_key(&kind) {
        Some(kind) => {
            let payload = json!({
                "kind": kind,
                "label": kind.label(),
                "text": kind.template(),
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        None => {
            let payload = json!({
                "error": format!("unknown analysis kind '{kind}'"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
