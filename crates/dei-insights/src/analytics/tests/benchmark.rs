use super::common::{organization, peer_set};
use crate::analytics::benchmark::{benchmark_from_dataset, compare_entities};
use crate::analytics::domain::{AnalyticsError, ScorecardMetric};
use crate::analytics::scorecard::ScorecardTargets;

#[test]
fn focal_is_excluded_wherever_it_appears() {
    let focal = organization("Accenture", 0.6);
    let a = organization("Infosys", 0.55);
    let b = organization("TCS", 0.62);
    let targets = ScorecardTargets::default();

    let orderings = [
        vec![focal.clone(), a.clone(), b.clone()],
        vec![a.clone(), focal.clone(), b.clone()],
        vec![a.clone(), b.clone(), focal.clone()],
    ];

    for comparisons in orderings {
        let result = compare_entities(&focal, &comparisons, &targets);
        assert_eq!(result.organizations(), vec!["Infosys", "TCS"]);
        assert!(result.comparison("Accenture").is_none());
        assert_eq!(result.focal.organization, "Accenture");
    }
}

#[test]
fn duplicate_peers_keep_first_occurrence() {
    let focal = organization("Accenture", 0.6);
    let first = organization("Infosys", 0.55);
    let mut second = organization("Infosys", 0.80);
    second.region = "Elsewhere".to_string();
    let wipro = organization("Wipro", 0.71);

    let result = compare_entities(
        &focal,
        &[first.clone(), wipro, second],
        &ScorecardTargets::default(),
    );

    assert_eq!(result.organizations(), vec!["Infosys", "Wipro"]);
    let infosys = result.comparison("Infosys").expect("infosys scored");
    let gender = infosys
        .entry(ScorecardMetric::GenderDiversity)
        .expect("gender entry");
    assert_eq!(gender.value, first.gender_diversity * 100.0);
}

#[test]
fn triplets_follow_comparison_then_metric_order() {
    let focal = organization("Accenture", 0.6);
    let result = compare_entities(&focal, &peer_set(), &ScorecardTargets::default());
    let triplets = result.triplets();

    assert_eq!(triplets.len(), 3 * 4);
    assert_eq!(triplets[0].organization, "Infosys");
    assert_eq!(triplets[0].metric, ScorecardMetric::GenderDiversity);
    assert_eq!(triplets[4].organization, "TCS");
    assert_eq!(triplets[11].organization, "Wipro");
    assert_eq!(triplets[11].metric, ScorecardMetric::InclusionNormalized);

    let focal_gender = result
        .focal
        .entry(ScorecardMetric::GenderDiversity)
        .expect("focal gender")
        .value;
    assert!(triplets
        .iter()
        .filter(|triplet| triplet.metric == ScorecardMetric::GenderDiversity)
        .all(|triplet| triplet.focal_value == focal_gender));
}

#[test]
fn empty_peer_set_still_scores_focal() {
    let focal = organization("Accenture", 0.6);
    let result = compare_entities(&focal, &[], &ScorecardTargets::default());

    assert!(result.comparisons.is_empty());
    assert!(result.triplets().is_empty());
    assert_eq!(result.focal.entries.len(), 4);
}

#[test]
fn dataset_lookup_rejects_unknown_names() {
    let dataset = peer_set();
    let targets = ScorecardTargets::default();

    let result = benchmark_from_dataset(&dataset, "Infosys", &["Wipro", "TCS"], &targets)
        .expect("known names resolve");
    assert_eq!(result.organizations(), vec!["Wipro", "TCS"]);

    let err = benchmark_from_dataset(&dataset, "Infosys", &["Globex"], &targets)
        .expect_err("unknown peer rejected");
    assert!(matches!(err, AnalyticsError::InvalidInput(message) if message.contains("Globex")));

    let err = benchmark_from_dataset(&dataset, "Globex", &["TCS"], &targets)
        .expect_err("unknown focal rejected");
    assert!(matches!(err, AnalyticsError::InvalidInput(_)));
}
