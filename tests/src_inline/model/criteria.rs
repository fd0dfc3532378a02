use super::*;
use crate::fixtures::{date, record, sample_records};
use crate::model::profile::ReportProfile;

#[test]
fn test_default_criteria_matches_everything() {
    let criteria = FilterCriteria::default();
    for r in sample_records() {
        assert!(criteria.matches(&r));
    }
}

#[test]
fn test_empty_selections_place_no_constraint() {
    let criteria = FilterCriteria {
        positions: BTreeSet::new(),
        genders: BTreeSet::new(),
        ..FilterCriteria::default()
    };
    let r = record(date(2023, 1, 1), 30, "Anything", "Other", 50.0);
    assert!(criteria.matches(&r));
}

#[test]
fn test_ranges_are_inclusive() {
    let criteria = FilterCriteria {
        date_range: Some(DateRange {
            start: date(2023, 1, 10),
            end: date(2023, 2, 3),
        }),
        age_range: Some(AgeRange { min: 25, max: 41 }),
        ..FilterCriteria::default()
    };
    assert!(criteria.matches(&record(date(2023, 1, 10), 25, "A", "F", 1.0)));
    assert!(criteria.matches(&record(date(2023, 2, 3), 41, "A", "F", 1.0)));
    assert!(!criteria.matches(&record(date(2023, 2, 4), 30, "A", "F", 1.0)));
    assert!(!criteria.matches(&record(date(2023, 1, 20), 42, "A", "F", 1.0)));
}

#[test]
fn test_category_selection() {
    let criteria = FilterCriteria {
        positions: ["Engineer".to_string()].into_iter().collect(),
        genders: ["Male".to_string()].into_iter().collect(),
        ..FilterCriteria::default()
    };
    assert!(criteria.matches(&record(date(2023, 1, 1), 30, "Engineer", "Male", 1.0)));
    assert!(!criteria.matches(&record(date(2023, 1, 1), 30, "Engineer", "Female", 1.0)));
    assert!(!criteria.matches(&record(date(2023, 1, 1), 30, "Analyst", "Male", 1.0)));
}

#[test]
fn test_control_domain_from_records() {
    let profile = ReportProfile::default_v1();
    let domain = ControlDomain::from_records(&sample_records(), &profile).unwrap();
    assert_eq!(domain.date_min, date(2023, 1, 10));
    assert_eq!(domain.date_max, date(2023, 4, 1));
    assert_eq!(domain.age_min, 25);
    assert_eq!(domain.age_max, 41);
    assert_eq!(domain.positions, vec!["Analyst", "Engineer", "Manager"]);
    assert_eq!(domain.genders, vec!["Female", "Male"]);
    assert_eq!(domain.threshold_default, 80);
    assert!(ControlDomain::from_records(&[], &profile).is_none());
}

#[test]
fn test_resolve_fills_missing_bounds() {
    let profile = ReportProfile::default_v1();
    let domain = ControlDomain::from_records(&sample_records(), &profile).unwrap();
    let (dates, ages) = domain
        .resolve(Some(date(2023, 2, 1)), None, None, Some(35))
        .unwrap();
    assert_eq!(dates.start, date(2023, 2, 1));
    assert_eq!(dates.end, date(2023, 4, 1));
    assert_eq!(ages.min, 25);
    assert_eq!(ages.max, 35);
}

#[test]
fn test_resolve_rejects_inverted_pairs() {
    let profile = ReportProfile::default_v1();
    let domain = ControlDomain::from_records(&sample_records(), &profile).unwrap();
    assert_eq!(
        domain.resolve(Some(date(2023, 3, 1)), Some(date(2023, 2, 1)), None, None),
        Err(FilterError::InvertedDateRange {
            start: date(2023, 3, 1),
            end: date(2023, 2, 1),
        })
    );
    assert_eq!(
        domain.resolve(None, None, Some(50), Some(20)),
        Err(FilterError::InvertedAgeRange { min: 50, max: 20 })
    );
}

#[test]
fn test_single_bound_beyond_data_matches_nothing() {
    let profile = ReportProfile::default_v1();
    let records = sample_records();
    let domain = ControlDomain::from_records(&records, &profile).unwrap();
    let (dates, ages) = domain
        .resolve(Some(date(2024, 1, 1)), None, Some(90), None)
        .unwrap();
    assert!(dates.start > dates.end);
    assert!(ages.min > ages.max);
    let criteria = FilterCriteria {
        date_range: Some(dates),
        age_range: Some(ages),
        ..FilterCriteria::default()
    };
    assert!(records.iter().all(|r| !criteria.matches(r)));
}
