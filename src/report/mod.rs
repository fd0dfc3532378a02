use serde::Serialize;

pub mod json;
pub mod text;

use crate::model::criteria::{ControlDomain, FilterCriteria};
use crate::model::record::GroupDimension;
use crate::pipeline::stage2_aggregate::{GroupMeans, TraitMeans, TrendPoint};
use crate::pipeline::stage3_recommend::Recommendation;
use crate::pipeline::stage4_charts::ChartOutcome;

#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub path: String,
    pub format: String,
    pub n_records: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreStats {
    pub mean: f64,
    pub median: f64,
    pub p10: f64,
    pub p90: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CognitiveTable {
    pub dimension: GroupDimension,
    pub groups: Vec<GroupMeans>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolInfo,
    pub input: InputSummary,
    pub filters: FilterCriteria,
    pub n_filtered: usize,
    pub overall: Option<ScoreStats>,
    pub iq: Option<ScoreStats>,
    pub recommendation: Recommendation,
    pub cognitive: Vec<CognitiveTable>,
    pub traits: Option<TraitMeans>,
    pub trend: Vec<TrendPoint>,
    pub charts: Vec<ChartOutcome>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ControlsData {
    pub tool: ToolInfo,
    pub input: InputSummary,
    pub controls: ControlDomain,
}

pub fn format_score(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx.min(n - 1)]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p10(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.10)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}

pub fn score_stats(values: &[f64]) -> Option<ScoreStats> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(ScoreStats {
        mean: sum / values.len() as f64,
        median: median(values),
        p10: p10(values),
        p90: p90(values),
        min: values.iter().copied().fold(f64::INFINITY, f64::min),
        max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
