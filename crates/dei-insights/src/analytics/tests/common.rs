use crate::analytics::domain::OrganizationMetrics;

pub(super) fn organization(name: &str, base: f64) -> OrganizationMetrics {
    crate::analytics::synthesizer::derive_record(name, base, 100_000, 50_000.0, 1.5)
}

pub(super) fn peer_set() -> Vec<OrganizationMetrics> {
    vec![
        organization("Infosys", 0.55),
        organization("TCS", 0.62),
        organization("Wipro", 0.71),
    ]
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}
