mod charts;
mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{error, info};

use crate::charts::ChartKind;
use crate::error::AppError;
use crate::input::{Dataset, load_records};
use crate::model::criteria::{ControlDomain, FilterCriteria};
use crate::model::profile::ReportProfile;
use crate::pipeline::stage1_filter::run_stage1;
use crate::pipeline::stage2_aggregate::run_stage2;
use crate::pipeline::stage3_recommend::run_stage3;
use crate::pipeline::stage4_charts::run_stage4;
use crate::pipeline::stage5_report::{ReportError, Stage5Input, write_reports};
use crate::report::json::render_controls_json;
use crate::report::text::render_controls_text;
use crate::report::{ControlsData, InputSummary, ToolInfo};

#[derive(Debug, Parser)]
#[command(
    name = "group-report",
    version,
    about = "Filter candidate assessment scores and render a group report"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Only log warnings and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter the table, render the charts and write the report.
    Run(RunArgs),
    /// Print the range of every filter control for a table.
    Controls(ControlsArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Table file (.xlsx, .xls, .ods, .csv, .tsv, optionally .gz for text).
    #[arg(long)]
    input: PathBuf,
    /// Output directory, created if missing.
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_parser = parse_date)]
    start_date: Option<NaiveDate>,
    #[arg(long, value_parser = parse_date)]
    end_date: Option<NaiveDate>,
    #[arg(long)]
    min_age: Option<u32>,
    #[arg(long)]
    max_age: Option<u32>,
    /// Keep only these positions (repeatable). None selected keeps all.
    #[arg(long = "position")]
    positions: Vec<String>,
    /// Keep only these genders (repeatable). None selected keeps all.
    #[arg(long = "gender")]
    genders: Vec<String>,
    /// Minimum Overall score counted as recommended.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    threshold: Option<u8>,
    /// Histogram bin count.
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    bins: Option<u16>,
    /// Charts to export (repeatable); defaults to all.
    #[arg(long = "chart", value_enum)]
    charts: Vec<ChartArg>,
}

#[derive(Debug, Args)]
struct ControlsArgs {
    #[arg(long)]
    input: PathBuf,
    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ChartArg {
    Performance,
    Cognitive,
    Traits,
    Trend,
    Iq,
    All,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);
    let result = match cli.command {
        Command::Run(args) => run(args),
        Command::Controls(args) => controls(args),
    };
    if let Err(err) = result {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: RunArgs) -> Result<(), AppError> {
    let mut profile = ReportProfile::default_v1();
    if let Some(bins) = args.bins {
        profile = profile.with_bins(usize::from(bins));
    }
    let threshold = args.threshold.unwrap_or(profile.threshold);

    let dataset = load_records(&args.input)?;
    let criteria = build_criteria(&args, &dataset, &profile)?;
    let selected = selected_charts(&args.charts);

    let filtered = run_stage1(&dataset.records, &criteria);
    info!(
        "{} of {} candidates match the selected filters",
        filtered.len(),
        dataset.records.len()
    );
    let aggregates = run_stage2(&filtered, &profile);
    let recommendation = run_stage3(&filtered, threshold);

    std::fs::create_dir_all(&args.out).map_err(ReportError::from)?;
    let charts = run_stage4(&args.out, &aggregates, &profile, &selected)?;

    let output = write_reports(
        &args.out,
        &Stage5Input {
            dataset: &dataset,
            criteria: &criteria,
            filtered: &filtered,
            aggregates: &aggregates,
            recommendation,
            charts: &charts,
        },
    )?;
    print!("{}", output.report_text);
    Ok(())
}

fn controls(args: ControlsArgs) -> Result<(), AppError> {
    let profile = ReportProfile::default_v1();
    let dataset = load_records(&args.input)?;
    let data = controls_data(&dataset, &profile)?;
    if args.json {
        print!("{}", render_controls_json(&data)?);
    } else {
        print!("{}", render_controls_text(&data));
    }
    Ok(())
}

fn controls_data(dataset: &Dataset, profile: &ReportProfile) -> Result<ControlsData, AppError> {
    let controls = ControlDomain::from_records(&dataset.records, profile).ok_or_else(|| {
        input::InputError::Empty(format!(
            "{} contains no candidate records",
            dataset.source.display()
        ))
    })?;
    Ok(ControlsData {
        tool: ToolInfo::current(),
        input: InputSummary {
            path: dataset.source.display().to_string(),
            format: dataset.format.to_string(),
            n_records: dataset.records.len(),
        },
        controls,
    })
}

fn build_criteria(
    args: &RunArgs,
    dataset: &Dataset,
    profile: &ReportProfile,
) -> Result<FilterCriteria, AppError> {
    let data = controls_data(dataset, profile)?;
    let (date_range, age_range) =
        data.controls
            .resolve(args.start_date, args.end_date, args.min_age, args.max_age)?;
    Ok(FilterCriteria {
        date_range: Some(date_range),
        age_range: Some(age_range),
        positions: args.positions.iter().cloned().collect(),
        genders: args.genders.iter().cloned().collect(),
    })
}

fn selected_charts(args: &[ChartArg]) -> BTreeSet<ChartKind> {
    if args.is_empty() || args.contains(&ChartArg::All) {
        return ChartKind::all().iter().copied().collect();
    }
    args.iter()
        .filter_map(|arg| match arg {
            ChartArg::Performance => Some(ChartKind::PerformanceDistribution),
            ChartArg::Cognitive => Some(ChartKind::CognitiveComparison),
            ChartArg::Traits => Some(ChartKind::PersonalityTraits),
            ChartArg::Trend => Some(ChartKind::PerformanceTrend),
            ChartArg::Iq => Some(ChartKind::IqDistribution),
            ChartArg::All => None,
        })
        .collect()
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got {value:?}: {e}"))
}

#[cfg(test)]
#[path = "../tests/src_inline/fixtures.rs"]
mod fixtures;

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
