use std::ops::Range;
use std::path::Path;

use chrono::{Days, NaiveDate};
use plotters::prelude::*;

use crate::charts::{ACCENT, ChartStatus, FONT, RenderError, draw_no_data};
use crate::model::profile::ChartSize;
use crate::pipeline::stage2_aggregate::TrendPoint;

pub fn render_performance_trend(
    path: &Path,
    trend: &[TrendPoint],
    size: ChartSize,
) -> Result<ChartStatus, RenderError> {
    let root = BitMapBackend::new(path, (size.width, size.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let title = "Performance Trend Over Time";

    let (Some(dates), Some(scores)) = (trend_date_range(trend), trend_score_range(trend)) else {
        draw_no_data(&root, title)?;
        root.present()?;
        return Ok(ChartStatus::NoData);
    };

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (FONT, 20))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(dates, scores)?;

    chart
        .configure_mesh()
        .x_labels(8)
        .x_label_formatter(&|d: &NaiveDate| d.format("%Y-%m-%d").to_string())
        .x_desc("Date")
        .y_desc("Average Performance Score")
        .label_style((FONT, 12))
        .draw()?;

    chart.draw_series(LineSeries::new(
        trend.iter().map(|p| (p.date, p.mean_overall)),
        ACCENT.stroke_width(2),
    ))?;
    chart.draw_series(
        trend
            .iter()
            .map(|p| Circle::new((p.date, p.mean_overall), 4, ACCENT.filled())),
    )?;

    root.present()?;
    Ok(ChartStatus::Rendered)
}

/// Date axis covering every point; a single date is padded by one day each side.
pub fn trend_date_range(trend: &[TrendPoint]) -> Option<Range<NaiveDate>> {
    let first = trend.iter().map(|p| p.date).min()?;
    let last = trend.iter().map(|p| p.date).max()?;
    if first == last {
        let lo = first.checked_sub_days(Days::new(1)).unwrap_or(first);
        let hi = last.checked_add_days(Days::new(1)).unwrap_or(last);
        return Some(lo..hi);
    }
    Some(first..last)
}

/// Score axis with 5% padding; flat series get a fixed band of one point.
pub fn trend_score_range(trend: &[TrendPoint]) -> Option<Range<f64>> {
    let values = trend
        .iter()
        .map(|p| p.mean_overall)
        .filter(|v| v.is_finite())
        .collect::<Vec<_>>();
    let lo = values.iter().copied().reduce(f64::min)?;
    let hi = values.iter().copied().reduce(f64::max)?;
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    Some((lo - pad)..(hi + pad))
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/trend.rs"]
mod tests;
