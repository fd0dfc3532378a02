use std::collections::BTreeSet;

use super::*;
use crate::fixtures::{date, sample_records};
use crate::model::criteria::{AgeRange, DateRange};

fn all_criteria_combinations() -> Vec<FilterCriteria> {
    let date_ranges = [
        None,
        Some(DateRange {
            start: date(2023, 1, 10),
            end: date(2023, 2, 3),
        }),
        Some(DateRange {
            start: date(2024, 1, 1),
            end: date(2024, 12, 31),
        }),
    ];
    let age_ranges = [None, Some(AgeRange { min: 25, max: 32 })];
    let positions: [BTreeSet<String>; 3] = [
        BTreeSet::new(),
        ["Engineer".to_string()].into_iter().collect(),
        ["Analyst".to_string(), "Manager".to_string()]
            .into_iter()
            .collect(),
    ];
    let genders: [BTreeSet<String>; 2] = [
        BTreeSet::new(),
        ["Female".to_string()].into_iter().collect(),
    ];

    let mut out = Vec::new();
    for d in &date_ranges {
        for a in &age_ranges {
            for p in &positions {
                for g in &genders {
                    out.push(FilterCriteria {
                        date_range: *d,
                        age_range: *a,
                        positions: p.clone(),
                        genders: g.clone(),
                    });
                }
            }
        }
    }
    out
}

#[test]
fn test_filtered_set_is_subset_satisfying_every_predicate() {
    let records = sample_records();
    for criteria in all_criteria_combinations() {
        let filtered = run_stage1(&records, &criteria);
        assert!(filtered.len() <= records.len());
        for r in &filtered {
            assert!(records.iter().any(|orig| std::ptr::eq(orig, *r)));
            if let Some(range) = criteria.date_range {
                assert!(r.date >= range.start && r.date <= range.end);
            }
            if let Some(range) = criteria.age_range {
                assert!(r.age >= range.min && r.age <= range.max);
            }
            if !criteria.positions.is_empty() {
                assert!(criteria.positions.contains(&r.position));
            }
            if !criteria.genders.is_empty() {
                assert!(criteria.genders.contains(&r.gender));
            }
        }
        let rejected = records.iter().filter(|r| !criteria.matches(r)).count();
        assert_eq!(filtered.len() + rejected, records.len());
    }
}

#[test]
fn test_no_selection_yields_full_set() {
    let records = sample_records();
    let filtered = run_stage1(&records, &FilterCriteria::default());
    assert_eq!(filtered.len(), records.len());
}

#[test]
fn test_combined_predicates() {
    let records = sample_records();
    let criteria = FilterCriteria {
        date_range: Some(DateRange {
            start: date(2023, 1, 1),
            end: date(2023, 2, 28),
        }),
        age_range: Some(AgeRange { min: 20, max: 35 }),
        positions: BTreeSet::new(),
        genders: ["Female".to_string()].into_iter().collect(),
    };
    let filtered = run_stage1(&records, &criteria);
    let overall = filtered.iter().map(|r| r.overall).collect::<Vec<_>>();
    assert_eq!(overall, vec![60.0, 72.0]);
}

#[test]
fn test_out_of_range_dates_yield_empty_set() {
    let records = sample_records();
    let criteria = FilterCriteria {
        date_range: Some(DateRange {
            start: date(2030, 1, 1),
            end: date(2030, 1, 2),
        }),
        ..FilterCriteria::default()
    };
    assert!(run_stage1(&records, &criteria).is_empty());
}
