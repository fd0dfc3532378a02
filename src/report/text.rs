use std::collections::BTreeSet;

use crate::charts::{ChartKind, ChartStatus, NO_DATA_MESSAGE};
use crate::model::criteria::FilterCriteria;
use crate::model::record::{cognitive_order, trait_order};
use crate::report::{ControlsData, ScoreStats, SummaryData, format_score};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Group Report\n");
    out.push_str("============\n\n");

    out.push_str(&format!(
        "Input: {} ({})\n",
        data.input.path, data.input.format
    ));
    out.push_str(&format_filters(&data.filters));
    out.push_str(&format!(
        "Candidates: {} of {} match the selected filters\n",
        data.n_filtered, data.input.n_records
    ));
    if let Some(stats) = &data.overall {
        out.push_str(&format!("Overall score: {}\n", format_stats(stats)));
    }
    if let Some(stats) = &data.iq {
        out.push_str(&format!("IQ: {}\n", format_stats(stats)));
    }
    out.push('\n');

    for (i, &kind) in ChartKind::all().iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, kind.title()));
        out.push_str(&chart_line(data, kind));
        out.push('\n');
        match kind {
            ChartKind::CognitiveComparison => push_cognitive(&mut out, data),
            ChartKind::PersonalityTraits => push_traits(&mut out, data),
            ChartKind::PerformanceTrend => push_trend(&mut out, data),
            _ => {}
        }
        out.push('\n');
    }

    out.push_str("Recommendation Summary\n");
    out.push_str(&format!(
        "Recommendation threshold: {} ({} candidates evaluated)\n",
        data.recommendation.threshold,
        data.recommendation.total()
    ));
    out.push_str(&format!(
        "Number of Recommended Candidates: {}\n",
        data.recommendation.recommended
    ));
    out.push_str(&format!(
        "Number of Not Recommended Candidates: {}\n",
        data.recommendation.not_recommended
    ));

    out
}

pub fn render_controls_text(data: &ControlsData) -> String {
    let c = &data.controls;
    let mut out = String::new();
    out.push_str(&format!(
        "Input: {} ({}, {} records)\n",
        data.input.path, data.input.format, data.input.n_records
    ));
    out.push_str(&format!("Date range: {} to {}\n", c.date_min, c.date_max));
    out.push_str(&format!("Age range: {} to {}\n", c.age_min, c.age_max));
    out.push_str(&format!("Positions: {}\n", c.positions.join(", ")));
    out.push_str(&format!("Genders: {}\n", c.genders.join(", ")));
    out.push_str(&format!(
        "Recommendation threshold: {} to {} (default {})\n",
        c.threshold_min, c.threshold_max, c.threshold_default
    ));
    out
}

fn format_filters(filters: &FilterCriteria) -> String {
    let mut out = String::new();
    match filters.date_range {
        Some(range) => out.push_str(&format!("Date range: {} to {}\n", range.start, range.end)),
        None => out.push_str("Date range: all\n"),
    }
    match filters.age_range {
        Some(range) => out.push_str(&format!("Age range: {} to {}\n", range.min, range.max)),
        None => out.push_str("Age range: all\n"),
    }
    out.push_str(&format!("Positions: {}\n", format_selection(&filters.positions)));
    out.push_str(&format!("Genders: {}\n", format_selection(&filters.genders)));
    out
}

fn format_selection(values: &BTreeSet<String>) -> String {
    if values.is_empty() {
        "all".to_string()
    } else {
        values.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

fn format_stats(stats: &ScoreStats) -> String {
    format!(
        "mean {}, median {}, p10 {}, p90 {}, min {}, max {}",
        format_score(stats.mean),
        format_score(stats.median),
        format_score(stats.p10),
        format_score(stats.p90),
        format_score(stats.min),
        format_score(stats.max)
    )
}

fn chart_line(data: &SummaryData, kind: ChartKind) -> String {
    let Some(outcome) = data.charts.iter().find(|c| c.kind == kind) else {
        return "Chart: skipped".to_string();
    };
    match (outcome.status, &outcome.path) {
        (ChartStatus::Skipped, _) => "Chart: skipped".to_string(),
        (ChartStatus::NoData, _) => NO_DATA_MESSAGE.to_string(),
        (ChartStatus::Rendered, Some(path)) => format!("Chart: {}", path.display()),
        (ChartStatus::Rendered, None) => format!("Chart: {}", kind.file_name()),
    }
}

fn push_cognitive(out: &mut String, data: &SummaryData) {
    for table in &data.cognitive {
        if table.groups.is_empty() {
            continue;
        }
        out.push_str(&format!("By {}:\n", table.dimension.label()));
        for g in &table.groups {
            let scores = cognitive_order()
                .iter()
                .map(|m| format!("{} {}", m.label(), format_score(g.value(*m))))
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!("  {} (n={}): {}\n", g.key, g.count, scores));
        }
    }
}

fn push_traits(out: &mut String, data: &SummaryData) {
    let Some(traits) = &data.traits else {
        return;
    };
    for t in trait_order() {
        out.push_str(&format!(
            "  {}: {}\n",
            t.label(),
            format_score(traits.value(*t))
        ));
    }
}

fn push_trend(out: &mut String, data: &SummaryData) {
    for p in &data.trend {
        out.push_str(&format!(
            "  {} (n={}): {}\n",
            p.date,
            p.count,
            format_score(p.mean_overall)
        ));
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
