use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::input::Dataset;
use crate::input::schema::REQUIRED_COLUMNS;
use crate::model::criteria::FilterCriteria;
use crate::model::record::{CandidateRecord, GroupDimension};
use crate::pipeline::stage2_aggregate::Aggregates;
use crate::pipeline::stage3_recommend::{Recommendation, is_recommended};
use crate::pipeline::stage4_charts::ChartOutcome;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{CognitiveTable, InputSummary, SummaryData, ToolInfo, score_stats};

pub const REPORT_TXT: &str = "report.txt";
pub const SUMMARY_JSON: &str = "summary.json";
pub const CANDIDATES_TSV: &str = "candidates.tsv";
pub const COL_RECOMMENDED: &str = "Recommended";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub dataset: &'a Dataset,
    pub criteria: &'a FilterCriteria,
    pub filtered: &'a [&'a CandidateRecord],
    pub aggregates: &'a Aggregates,
    pub recommendation: Recommendation,
    pub charts: &'a [ChartOutcome],
}

#[derive(Debug, Clone)]
pub struct Stage5Output {
    pub summary: SummaryData,
    pub report_text: String,
    pub report_txt: PathBuf,
    pub summary_json: PathBuf,
    pub candidates_tsv: PathBuf,
}

pub fn write_reports(out_dir: &Path, input: &Stage5Input<'_>) -> Result<Stage5Output, ReportError> {
    fs::create_dir_all(out_dir)?;

    let summary = build_summary(input);
    let report_text = render_report_text(&summary);

    let report_txt = out_dir.join(REPORT_TXT);
    write_text(&report_txt, &report_text)?;

    let summary_json = out_dir.join(SUMMARY_JSON);
    write_text(&summary_json, &render_summary_json(&summary)?)?;

    let candidates_tsv = out_dir.join(CANDIDATES_TSV);
    write_candidates_tsv(&candidates_tsv, input.filtered, input.recommendation.threshold)?;

    info!("reports written to {}", out_dir.display());
    Ok(Stage5Output {
        summary,
        report_text,
        report_txt,
        summary_json,
        candidates_tsv,
    })
}

pub fn build_summary(input: &Stage5Input<'_>) -> SummaryData {
    let overall = input.filtered.iter().map(|r| r.overall).collect::<Vec<_>>();
    let iq = input.filtered.iter().map(|r| r.iq).collect::<Vec<_>>();
    let cognitive = [
        GroupDimension::Age,
        GroupDimension::Gender,
        GroupDimension::Position,
    ]
    .into_iter()
    .map(|dimension| CognitiveTable {
        dimension,
        groups: input.aggregates.cognitive(dimension).to_vec(),
    })
    .collect();

    SummaryData {
        tool: ToolInfo::current(),
        input: InputSummary {
            path: input.dataset.source.display().to_string(),
            format: input.dataset.format.to_string(),
            n_records: input.dataset.records.len(),
        },
        filters: input.criteria.clone(),
        n_filtered: input.filtered.len(),
        overall: score_stats(&overall),
        iq: score_stats(&iq),
        recommendation: input.recommendation,
        cognitive,
        traits: input.aggregates.traits.clone(),
        trend: input.aggregates.trend.clone(),
        charts: input.charts.to_vec(),
    }
}

fn write_candidates_tsv(
    path: &Path,
    records: &[&CandidateRecord],
    threshold: u8,
) -> Result<(), ReportError> {
    let mut w = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_path(path)?;
    let mut header = REQUIRED_COLUMNS.to_vec();
    header.push(COL_RECOMMENDED);
    w.write_record(&header)?;
    for r in records {
        w.write_record([
            r.date.to_string(),
            r.age.to_string(),
            r.position.clone(),
            r.gender.clone(),
            r.overall.to_string(),
            r.iq.to_string(),
            r.logical_reasoning.to_string(),
            r.numerical_reasoning.to_string(),
            r.verbal_reasoning.to_string(),
            r.openness.to_string(),
            r.conscientiousness.to_string(),
            r.extraversion.to_string(),
            r.agreeableness.to_string(),
            r.neuroticism.to_string(),
            is_recommended(r, threshold).to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
