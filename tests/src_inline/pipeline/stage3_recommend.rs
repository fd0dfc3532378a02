use super::*;
use crate::fixtures::{date, record, sample_records};

#[test]
fn test_example_threshold_80() {
    let records = vec![
        record(date(2023, 1, 1), 30, "A", "F", 60.0),
        record(date(2023, 1, 1), 30, "A", "F", 85.0),
        record(date(2023, 1, 1), 30, "A", "F", 90.0),
    ];
    let refs = records.iter().collect::<Vec<_>>();
    let rec = run_stage3(&refs, 80);
    assert_eq!(rec.recommended, 2);
    assert_eq!(rec.not_recommended, 1);
}

#[test]
fn test_threshold_is_inclusive() {
    let r = record(date(2023, 1, 1), 30, "A", "F", 80.0);
    assert!(is_recommended(&r, 80));
    assert!(!is_recommended(&r, 81));
}

#[test]
fn test_counts_partition_filtered_set_for_every_threshold() {
    let records = sample_records();
    let refs = records.iter().collect::<Vec<_>>();
    for threshold in 0..=100u8 {
        let rec = run_stage3(&refs, threshold);
        assert_eq!(rec.total(), refs.len());
        assert_eq!(rec.threshold, threshold);
    }
    assert_eq!(run_stage3(&refs, 0).recommended, refs.len());
    assert_eq!(run_stage3(&refs, 100).recommended, 0);
}

#[test]
fn test_empty_set() {
    let rec = run_stage3(&[], 80);
    assert_eq!(rec.total(), 0);
}
