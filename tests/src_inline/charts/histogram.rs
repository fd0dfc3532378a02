use super::*;
use crate::fixtures::{date, make_temp_dir, record, sample_records};
use crate::model::profile::ReportProfile;
use crate::pipeline::stage2_aggregate::run_stage2;

#[test]
fn test_curve_color_darkens_fill() {
    assert_eq!(curve_color(RGBColor(100, 200, 50)), RGBColor(60, 120, 30));
}

#[test]
fn test_single_candidate_renders_without_curves() {
    let dir = make_temp_dir("hist_partial");
    let records = vec![record(date(2023, 1, 1), 30, "Analyst", "Female", 75.0)];
    let refs = records.iter().collect::<Vec<_>>();
    let profile = ReportProfile::default_v1();
    let aggregates = run_stage2(&refs, &profile);
    assert!(aggregates.overall.as_ref().unwrap().kde.is_none());
    let path = dir.join("performance.png");
    let status =
        render_performance_distribution(&path, &aggregates, profile.performance_size).unwrap();
    assert_eq!(status, ChartStatus::Rendered);
    assert!(path.exists());
}

#[test]
fn test_stacked_panels_get_layer_curves() {
    let records = sample_records();
    let refs = records.iter().collect::<Vec<_>>();
    let aggregates = run_stage2(&refs, &ReportProfile::default_v1());
    let by_gender = aggregates.overall_by_gender.as_ref().unwrap();
    assert!(by_gender.layers.iter().all(|l| l.kde.is_some()));
}
