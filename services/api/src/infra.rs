use crate::commands::DatasetOptions;
use dei_insights::analytics::router::DatasetSelection;
use dei_insights::analytics::{AnalysisKind, OrganizationMetrics};
use dei_insights::config::AnalyticsConfig;
use dei_insights::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// CLI flags map onto the same selection the HTTP API accepts; no `--org` means the default roster.
pub(crate) fn materialize_dataset(
    options: &DatasetOptions,
    defaults: &AnalyticsConfig,
) -> Result<(u64, Vec<OrganizationMetrics>), AppError> {
    let selection = DatasetSelection {
        seed: options.seed,
        organizations: if options.organizations.is_empty() {
            None
        } else {
            Some(options.organizations.clone())
        },
    };
    selection.materialize(defaults)
}

pub(crate) fn parse_analysis_kind(raw: &str) -> Result<AnalysisKind, String> {
    AnalysisKind::from_key(raw).ok_or_else(|| {
        let known: Vec<&str> = AnalysisKind::ordered()
            .into_iter()
            .map(AnalysisKind::key)
            .collect();
        format!("unknown analysis kind '{raw}' (expected one of {})", known.join(", "))
    })
}
