use crate::analytics::domain::AnalyticsError;
use crate::analytics::synthesizer::{synthesize, DEFAULT_ORGANIZATIONS};

#[test]
fn same_seed_reproduces_identical_dataset() {
    let first = synthesize(2024, &DEFAULT_ORGANIZATIONS).expect("dataset builds");
    let second = synthesize(2024, &DEFAULT_ORGANIZATIONS).expect("dataset builds");

    assert_eq!(first, second);
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.gender_diversity.to_bits(), b.gender_diversity.to_bits());
        assert_eq!(a.revenue_crores.to_bits(), b.revenue_crores.to_bits());
    }
}

#[test]
fn different_seeds_produce_different_datasets() {
    let first = synthesize(1, &DEFAULT_ORGANIZATIONS).expect("dataset builds");
    let second = synthesize(2, &DEFAULT_ORGANIZATIONS).expect("dataset builds");

    assert_ne!(first, second);
}

#[test]
fn generated_records_respect_declared_bounds() {
    for seed in 0..200 {
        let records = synthesize(seed, &DEFAULT_ORGANIZATIONS).expect("dataset builds");
        assert_eq!(records.len(), DEFAULT_ORGANIZATIONS.len());
        for record in &records {
            assert!(record.within_bounds(), "seed {seed} produced {record:?}");
            assert!([50_000, 100_000, 250_000, 500_000].contains(&record.employee_count));
            assert!((5_000.0..250_000.0).contains(&record.revenue_crores));
            assert!((0.5..3.0).contains(&record.dei_budget_pct));
        }
    }
}

#[test]
fn empty_name_set_is_rejected() {
    let names: [&str; 0] = [];
    let err = synthesize(42, &names).expect_err("empty roster rejected");

    assert!(matches!(err, AnalyticsError::InvalidInput(_)));
}

#[test]
fn records_preserve_caller_order() {
    let names = ["Wipro", "Accenture", "HCL"];
    let records = synthesize(9, &names).expect("dataset builds");
    let produced: Vec<&str> = records.iter().map(|record| record.name.as_str()).collect();

    assert_eq!(produced, names.to_vec());
}
