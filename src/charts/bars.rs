use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::charts::{
    ChartStatus, FONT, OUTLINE, RenderError, bar_span, category_label, draw_no_data, palette,
    value_axis_max,
};
use crate::model::profile::ChartSize;
use crate::model::record::{GroupDimension, cognitive_order, trait_order};
use crate::pipeline::stage2_aggregate::{Aggregates, GroupMeans, TraitMeans};

const AVERAGE_SCORE: &str = "Average Score";

pub fn render_cognitive_comparison(
    path: &Path,
    aggregates: &Aggregates,
    size: ChartSize,
) -> Result<ChartStatus, RenderError> {
    let root = BitMapBackend::new(path, (size.width, size.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, 3));

    let dimensions = [
        GroupDimension::Age,
        GroupDimension::Gender,
        GroupDimension::Position,
    ];
    let mut drawn = 0usize;
    for (area, dimension) in panels.iter().zip(dimensions) {
        let title = format!("By {}", dimension.label());
        if draw_grouped_bars(area, &title, dimension, aggregates.cognitive(dimension))? {
            drawn += 1;
        }
    }

    root.present()?;
    Ok(if drawn == 0 {
        ChartStatus::NoData
    } else {
        ChartStatus::Rendered
    })
}

pub fn draw_grouped_bars<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    title: &str,
    dimension: GroupDimension,
    groups: &[GroupMeans],
) -> Result<bool, RenderError> {
    if groups.is_empty() {
        draw_no_data(area, title)?;
        return Ok(false);
    }
    let names = groups.iter().map(|g| g.key.to_string()).collect::<Vec<_>>();
    let tallest = groups
        .iter()
        .flat_map(|g| cognitive_order().iter().map(move |m| g.value(*m)))
        .fold(0.0, f64::max);
    let n = groups.len();

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, 18))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0f64..value_axis_max(tallest))?;

    let formatter = |v: &f64| category_label(&names, *v);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&formatter)
        .x_desc(dimension.label())
        .y_desc(AVERAGE_SCORE)
        .label_style((FONT, 11))
        .draw()?;

    let slots = cognitive_order().len();
    for (slot, measure) in cognitive_order().iter().enumerate() {
        let color = palette(slot);
        chart
            .draw_series(groups.iter().enumerate().map(|(i, g)| {
                let (lo, hi) = bar_span(i, slot, slots);
                Rectangle::new([(lo, 0.0), (hi, g.value(*measure))], color.filled())
            }))?
            .label(measure.label())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font((FONT, 11))
        .draw()?;

    Ok(true)
}

pub fn render_personality_traits(
    path: &Path,
    traits: Option<&TraitMeans>,
    size: ChartSize,
    axis_max: f64,
) -> Result<ChartStatus, RenderError> {
    let root = BitMapBackend::new(path, (size.width, size.height)).into_drawing_area();
    root.fill(&WHITE)?;
    let title = "Personality Trait Insights";

    let Some(traits) = traits else {
        draw_no_data(&root, title)?;
        root.present()?;
        return Ok(ChartStatus::NoData);
    };

    let names = trait_order()
        .iter()
        .map(|t| t.label().to_string())
        .collect::<Vec<_>>();
    let n = names.len();

    let mut chart = ChartBuilder::on(&root)
        .caption(title, (FONT, 20))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..(n as f64 - 0.5), 0f64..axis_max)?;

    let formatter = |v: &f64| category_label(&names, *v);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&formatter)
        .x_desc("Personality Traits")
        .y_desc(AVERAGE_SCORE)
        .label_style((FONT, 12))
        .draw()?;

    for (i, t) in trait_order().iter().enumerate() {
        let (lo, hi) = bar_span(i, 0, 1);
        let top = traits.value(*t).min(axis_max);
        let color = palette(i);
        chart.draw_series([
            Rectangle::new([(lo, 0.0), (hi, top)], color.filled()),
            Rectangle::new([(lo, 0.0), (hi, top)], OUTLINE.stroke_width(1)),
        ])?;
    }

    root.present()?;
    Ok(ChartStatus::Rendered)
}
