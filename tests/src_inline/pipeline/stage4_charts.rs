use super::*;
use crate::fixtures::{make_temp_dir, sample_records};
use crate::pipeline::stage2_aggregate::run_stage2;

#[test]
fn test_unselected_charts_are_skipped_without_files() {
    let dir = make_temp_dir("stage4_skip");
    let records = sample_records();
    let refs = records.iter().collect::<Vec<_>>();
    let profile = ReportProfile::default_v1();
    let aggregates = run_stage2(&refs, &profile);

    let outcomes = run_stage4(&dir, &aggregates, &profile, &BTreeSet::new()).unwrap();
    assert_eq!(outcomes.len(), ChartKind::all().len());
    for (outcome, kind) in outcomes.iter().zip(ChartKind::all()) {
        assert_eq!(outcome.kind, *kind);
        assert_eq!(outcome.status, ChartStatus::Skipped);
        assert!(outcome.path.is_none());
        assert!(!dir.join(kind.file_name()).exists());
    }
}

#[test]
fn test_all_charts_render_from_sample_records() {
    let dir = make_temp_dir("stage4_render");
    let records = sample_records();
    let refs = records.iter().collect::<Vec<_>>();
    let profile = ReportProfile::default_v1();
    let aggregates = run_stage2(&refs, &profile);
    let selected = ChartKind::all().iter().copied().collect::<BTreeSet<_>>();

    let outcomes = run_stage4(&dir, &aggregates, &profile, &selected).unwrap();
    assert_eq!(outcomes.len(), ChartKind::all().len());
    for outcome in &outcomes {
        assert_eq!(outcome.status, ChartStatus::Rendered, "{:?}", outcome.kind);
        let path = outcome.path.as_ref().unwrap();
        assert_eq!(path, &dir.join(outcome.kind.file_name()));
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }
}

#[test]
fn test_empty_subset_renders_no_data_panels() {
    let dir = make_temp_dir("stage4_empty");
    let profile = ReportProfile::default_v1();
    let aggregates = run_stage2(&[], &profile);
    let selected = ChartKind::all().iter().copied().collect::<BTreeSet<_>>();

    let outcomes = run_stage4(&dir, &aggregates, &profile, &selected).unwrap();
    for outcome in &outcomes {
        assert_eq!(outcome.status, ChartStatus::NoData, "{:?}", outcome.kind);
        assert!(dir.join(outcome.kind.file_name()).exists());
    }
}
