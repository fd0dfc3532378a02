use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::charts::bars::{render_cognitive_comparison, render_personality_traits};
use crate::charts::histogram::{render_iq_distribution, render_performance_distribution};
use crate::charts::trend::render_performance_trend;
use crate::charts::{ChartKind, ChartStatus, RenderError};
use crate::model::profile::ReportProfile;
use crate::pipeline::stage2_aggregate::Aggregates;

#[derive(Debug, Clone, Serialize)]
pub struct ChartOutcome {
    pub kind: ChartKind,
    pub status: ChartStatus,
    pub path: Option<PathBuf>,
}

pub fn run_stage4(
    out_dir: &Path,
    aggregates: &Aggregates,
    profile: &ReportProfile,
    selected: &BTreeSet<ChartKind>,
) -> Result<Vec<ChartOutcome>, RenderError> {
    let mut outcomes = Vec::with_capacity(ChartKind::all().len());
    for &kind in ChartKind::all() {
        if !selected.contains(&kind) {
            outcomes.push(ChartOutcome {
                kind,
                status: ChartStatus::Skipped,
                path: None,
            });
            continue;
        }
        let path = out_dir.join(kind.file_name());
        let status = render_chart(kind, &path, aggregates, profile)?;
        match status {
            ChartStatus::NoData => warn!(
                "{}: no data available for the selected filters",
                kind.title()
            ),
            _ => info!("{} written to {}", kind.title(), path.display()),
        }
        outcomes.push(ChartOutcome {
            kind,
            status,
            path: Some(path),
        });
    }
    Ok(outcomes)
}

fn render_chart(
    kind: ChartKind,
    path: &Path,
    aggregates: &Aggregates,
    profile: &ReportProfile,
) -> Result<ChartStatus, RenderError> {
    match kind {
        ChartKind::PerformanceDistribution => {
            render_performance_distribution(path, aggregates, profile.performance_size)
        }
        ChartKind::CognitiveComparison => {
            render_cognitive_comparison(path, aggregates, profile.cognitive_size)
        }
        ChartKind::PersonalityTraits => render_personality_traits(
            path,
            aggregates.traits.as_ref(),
            profile.traits_size,
            profile.trait_axis_max,
        ),
        ChartKind::PerformanceTrend => {
            render_performance_trend(path, &aggregates.trend, profile.trend_size)
        }
        ChartKind::IqDistribution => render_iq_distribution(path, aggregates, profile.iq_size),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_charts.rs"]
mod tests;
