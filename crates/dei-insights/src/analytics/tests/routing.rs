use crate::analytics::router::analytics_router;
use crate::config::AnalyticsConfig;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post_json(uri: &str, payload: Value) -> (StatusCode, Value) {
    post_body(AnalyticsConfig::default(), uri, payload.to_string()).await
}

async fn post_body(config: AnalyticsConfig, uri: &str, body: String) -> (StatusCode, Value) {
    let router = analytics_router(config);
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .expect("request builds");

    let response = router.oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn dataset_endpoint_uses_default_roster_and_seed() {
    let (status, body) = post_json("/api/v1/dataset", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["seed"], 42);
    assert_eq!(body["records"].as_array().map(Vec::len), Some(6));
    assert_eq!(body["overview"]["organization_count"], 6);
    assert_eq!(body["records"][0]["name"], "TechMahindra");
}

#[tokio::test]
async fn dataset_endpoint_is_reproducible_for_a_seed() {
    let payload = json!({ "seed": 99, "organizations": ["Alpha", "Beta"] });
    let (_, first) = post_json("/api/v1/dataset", payload.clone()).await;
    let (_, second) = post_json("/api/v1/dataset", payload).await;

    assert_eq!(first["records"], second["records"]);
}

#[tokio::test]
async fn dataset_endpoint_rejects_empty_roster() {
    let (status, body) = post_json("/api/v1/dataset", json!({ "organizations": [] })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .is_some_and(|message| message.contains("invalid input")));
}

#[tokio::test]
async fn scorecard_endpoint_honours_custom_targets() {
    let (status, body) = post_json(
        "/api/v1/scorecard",
        json!({
            "organization": "Infosys",
            "targets": { "gender_diversity": 0.5, "pay_equity_score": 0.9 }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let entries = body["scorecard"]["entries"].as_array().expect("entries");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["metric"], "gender_diversity");
    assert_eq!(entries[0]["target"], 50.0);
}

#[tokio::test]
async fn scorecard_endpoint_rejects_invalid_targets_as_bad_request() {
    let invalid_targets = [
        json!({ "happiness": 0.5 }),
        json!({}),
        json!({ "gender_diversity": 1.5 }),
    ];

    for targets in invalid_targets {
        for uri in ["/api/v1/scorecard", "/api/v1/benchmark"] {
            let payload = json!({
                "organization": "Infosys",
                "focal": "Infosys",
                "targets": targets,
            });
            let (status, body) = post_json(uri, payload).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri} with {targets}");
            assert!(
                body["error"]
                    .as_str()
                    .is_some_and(|message| message.contains("invalid configuration")),
                "{uri} with {targets} returned {body}"
            );
        }
    }
}

#[tokio::test]
async fn scorecard_endpoint_rejects_repeated_target_keys() {
    let body = r#"{
        "organization": "Infosys",
        "targets": { "gender_diversity": 0.4, "gender_diversity": 0.9 }
    }"#;
    let (status, body) =
        post_body(AnalyticsConfig::default(), "/api/v1/scorecard", body.to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .is_some_and(|message| message.contains("duplicate target for 'gender_diversity'")));
}

#[tokio::test]
async fn benchmark_endpoint_excludes_focal_from_peers() {
    let (status, body) = post_json(
        "/api/v1/benchmark",
        json!({ "focal": "TCS", "comparisons": ["TCS", "Wipro", "HCL", "Wipro"] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let peers: Vec<&str> = body["comparisons"]
        .as_array()
        .expect("comparisons")
        .iter()
        .filter_map(|scorecard| scorecard["organization"].as_str())
        .collect();
    assert_eq!(peers, vec!["Wipro", "HCL"]);
    assert_eq!(body["triplets"].as_array().map(Vec::len), Some(8));
}

#[tokio::test]
async fn benchmark_endpoint_rejects_unknown_organization() {
    let (status, _) = post_json(
        "/api/v1/benchmark",
        json!({ "focal": "Initech", "comparisons": ["TCS"] }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn impact_endpoint_reproduces_reference_projection() {
    let (status, body) = post_json(
        "/api/v1/impact",
        json!({
            "diversity_increase_pct": 15,
            "inclusion_improvement_pts": 12,
            "retention_improvement_pct": 8,
            "budget_lakhs": 50,
            "employee_count": 5000
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let roi = body["projection"]["roi_percent"].as_f64().expect("roi");
    assert!((roi - 21_860.0).abs() < 1e-6);
    let invested = body["invested_amount_currency"].as_f64().expect("invested");
    assert!((invested - 5_000_000.0).abs() < 1e-6);
}

#[tokio::test]
async fn impact_endpoint_falls_back_to_configured_salary() {
    let config = AnalyticsConfig {
        base_salary_lakhs: 24.0,
        ..AnalyticsConfig::default()
    };
    let payload = json!({
        "diversity_increase_pct": 15,
        "inclusion_improvement_pts": 12,
        "retention_improvement_pct": 8,
        "budget_lakhs": 50,
        "employee_count": 5000
    });
    let (status, body) = post_body(config.clone(), "/api/v1/impact", payload.to_string()).await;

    assert_eq!(status, StatusCode::OK);
    let total = body["projection"]["total_benefit"].as_f64().expect("total");
    assert!((total - 21_960.0).abs() < 1e-6);

    let mut explicit = payload;
    explicit["base_salary_lakhs"] = json!(12.0);
    let (_, body) = post_body(config, "/api/v1/impact", explicit.to_string()).await;
    let total = body["projection"]["total_benefit"].as_f64().expect("total");
    assert!((total - 10_980.0).abs() < 1e-6);
}

#[tokio::test]
async fn impact_endpoint_declines_overflowing_inputs() {
    let (status, body) = post_json(
        "/api/v1/impact",
        json!({
            "diversity_increase_pct": 1e308,
            "inclusion_improvement_pts": 0,
            "retention_improvement_pct": 0,
            "budget_lakhs": 50,
            "employee_count": 5000
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .is_some_and(|message| message.contains("invalid input")));
}

#[tokio::test]
async fn impact_endpoint_declines_zero_budget() {
    let (status, body) = post_json(
        "/api/v1/impact",
        json!({
            "diversity_increase_pct": 15,
            "inclusion_improvement_pts": 12,
            "retention_improvement_pct": 8,
            "budget_lakhs": 0,
            "employee_count": 5000
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"]
        .as_str()
        .is_some_and(|message| message.contains("division by zero")));
}

#[tokio::test]
async fn analysis_endpoint_serves_canned_templates() {
    let router = analytics_router(AnalyticsConfig::default());
    let request = Request::builder()
        .uri("/api/v1/analysis/gap-analysis")
        .body(Body::empty())
        .expect("request builds");
    let response = router.oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::OK);

    let router = analytics_router(AnalyticsConfig::default());
    let request = Request::builder()
        .uri("/api/v1/analysis/horoscope")
        .body(Body::empty())
        .expect("request builds");
    let response = router.oneshot(request).await.expect("router responds");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
