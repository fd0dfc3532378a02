use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::charts::{
    ACCENT, ChartStatus, FONT, OUTLINE, RenderError, draw_no_data, palette, value_axis_max,
};
use crate::model::profile::ChartSize;
use crate::pipeline::stage2_aggregate::{Aggregates, DistributionSummary, StackedHistogram};

const FREQUENCY: &str = "Frequency";
const OVERALL_DESC: &str = "Overall Performance Score";

pub fn render_performance_distribution(
    path: &Path,
    aggregates: &Aggregates,
    size: ChartSize,
) -> Result<ChartStatus, RenderError> {
    let root = BitMapBackend::new(path, (size.width, size.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 3));

    let mut drawn = 0usize;
    if draw_distribution_panel(
        &panels[0],
        "All Candidates",
        OVERALL_DESC,
        aggregates.overall.as_ref(),
    )? {
        drawn += 1;
    }
    if draw_stacked_panel(
        &panels[1],
        "By Gender",
        OVERALL_DESC,
        aggregates.overall_by_gender.as_ref(),
    )? {
        drawn += 1;
    }
    if draw_stacked_panel(
        &panels[2],
        "By Position",
        OVERALL_DESC,
        aggregates.overall_by_position.as_ref(),
    )? {
        drawn += 1;
    }

    root.present()?;
    Ok(if drawn == 0 {
        ChartStatus::NoData
    } else {
        ChartStatus::Rendered
    })
}

pub fn render_iq_distribution(
    path: &Path,
    aggregates: &Aggregates,
    size: ChartSize,
) -> Result<ChartStatus, RenderError> {
    let root = BitMapBackend::new(path, (size.width, size.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let drawn = draw_distribution_panel(
        &root,
        "Group IQ Analysis",
        "IQ Score",
        aggregates.iq.as_ref(),
    )?;
    root.present()?;
    Ok(if drawn {
        ChartStatus::Rendered
    } else {
        ChartStatus::NoData
    })
}

pub fn draw_distribution_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    x_desc: &str,
    summary: Option<&DistributionSummary>,
) -> Result<bool, RenderError> {
    let Some(summary) = summary else {
        draw_no_data(area, title)?;
        return Ok(false);
    };
    let hist = &summary.histogram;
    let tallest = hist.counts.iter().copied().max().unwrap_or(0) as f64;
    let kde_peak = summary
        .kde
        .as_ref()
        .map(|curve| curve.iter().map(|(_, y)| *y).fold(0.0, f64::max))
        .unwrap_or(0.0);

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, 18))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(
            hist.lo()..hist.hi(),
            0f64..value_axis_max(tallest.max(kde_peak)),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_desc)
        .y_desc(FREQUENCY)
        .label_style((FONT, 12))
        .draw()?;

    let fill = palette(0);
    chart.draw_series(hist.bins().map(|(lo, hi, count)| {
        Rectangle::new([(lo, 0.0), (hi, count as f64)], fill.filled())
    }))?;
    chart.draw_series(hist.bins().map(|(lo, hi, count)| {
        Rectangle::new([(lo, 0.0), (hi, count as f64)], OUTLINE.stroke_width(1))
    }))?;

    if let Some(curve) = &summary.kde {
        chart.draw_series(LineSeries::new(
            curve.iter().copied(),
            ACCENT.stroke_width(2),
        ))?;
    }

    Ok(true)
}

/// Darker shade of a pastel fill so the curve stays visible over its bars.
fn curve_color(fill: RGBColor) -> RGBColor {
    let RGBColor(r, g, b) = fill;
    RGBColor(
        (f64::from(r) * 0.6) as u8,
        (f64::from(g) * 0.6) as u8,
        (f64::from(b) * 0.6) as u8,
    )
}

pub fn draw_stacked_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    x_desc: &str,
    stacked: Option<&StackedHistogram>,
) -> Result<bool, RenderError> {
    let Some(stacked) = stacked else {
        draw_no_data(area, title)?;
        return Ok(false);
    };
    let tallest = stacked.stack_heights().into_iter().max().unwrap_or(0) as f64;
    let kde_peak = stacked
        .layers
        .iter()
        .filter_map(|layer| layer.kde.as_ref())
        .flat_map(|curve| curve.iter().map(|(_, y)| *y))
        .fold(0.0, f64::max);

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, 18))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(
            stacked.lo()..stacked.hi(),
            0f64..value_axis_max(tallest.max(kde_peak)),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(x_desc)
        .y_desc(FREQUENCY)
        .label_style((FONT, 12))
        .draw()?;

    let n_bins = stacked.edges.len().saturating_sub(1);
    let mut base = vec![0usize; n_bins];
    for (layer_idx, layer) in stacked.layers.iter().enumerate() {
        let color = palette(layer_idx);
        let mut rects = Vec::with_capacity(n_bins * 2);
        for (bin, count) in layer.counts.iter().enumerate() {
            if *count == 0 {
                continue;
            }
            let lo = stacked.edges[bin];
            let hi = stacked.edges[bin + 1];
            let bottom = base[bin] as f64;
            let top = (base[bin] + count) as f64;
            rects.push(Rectangle::new([(lo, bottom), (hi, top)], color.filled()));
            rects.push(Rectangle::new([(lo, bottom), (hi, top)], OUTLINE.stroke_width(1)));
            base[bin] += count;
        }
        chart
            .draw_series(rects)?
            .label(layer.label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    // curves go on top of every layer's bars
    for (layer_idx, layer) in stacked.layers.iter().enumerate() {
        if let Some(curve) = &layer.kde {
            chart.draw_series(LineSeries::new(
                curve.iter().copied(),
                curve_color(palette(layer_idx)).stroke_width(2),
            ))?;
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font((FONT, 11))
        .draw()?;

    Ok(true)
}

#[cfg(test)]
#[path = "../../tests/src_inline/charts/histogram.rs"]
mod tests;
