use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use rock_compare::error::CompareError;
use rock_compare::input::{load_matrices, load_weights};
use rock_compare::logging::init_logging;
use rock_compare::model::thresholds::{AnalysisProfile, CRITICALITY_THRESHOLD};
use rock_compare::pipeline::Analyzer;
use rock_compare::report::{ComparisonReport, ReportFormat, render};

/// Compare two sample measurement files under a weighted discrepancy metric.
#[derive(Debug, Parser)]
#[command(name = "rock-compare", version, about)]
struct Cli {
    /// First sample file (comma-separated rows)
    file1: PathBuf,

    /// Second sample file, same shape as the first
    file2: PathBuf,

    /// Distance formula: x (weighted absolute) or y (weighted euclidean)
    #[arg(long, default_value = "x")]
    analysis: String,

    /// Summary statistic: criticality (count above threshold) or d (mean)
    #[arg(long, default_value = "criticality")]
    summary: String,

    /// Weight file: one comma-separated row, one weight per variable
    #[arg(long, default_value = "weights.csv")]
    weights: PathBuf,

    /// Threshold used by the criticality summary
    #[arg(long, default_value_t = CRITICALITY_THRESHOLD)]
    criticality: f64,

    /// Output format: text or json
    #[arg(long, default_value = "text", value_parser = parse_format)]
    format: ReportFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone)]
struct RunConfig {
    files: [PathBuf; 2],
    weights: PathBuf,
    analysis: String,
    summary: String,
    profile: AnalysisProfile,
    format: ReportFormat,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            files: [cli.file1, cli.file2],
            weights: cli.weights,
            analysis: cli.analysis,
            summary: cli.summary,
            profile: AnalysisProfile::with_threshold(cli.criticality),
            format: cli.format,
        }
    }
}

fn parse_format(s: &str) -> Result<ReportFormat, String> {
    match s {
        "text" => Ok(ReportFormat::Text),
        "json" => Ok(ReportFormat::Json),
        _ => Err("invalid --format (use text|json)".to_string()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(RunConfig::from(cli)) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!("{err:?}");
            eprintln!("error [{}]: {err}", err.stage());
            ExitCode::FAILURE
        }
    }
}

fn run(config: RunConfig) -> Result<String, CompareError> {
    let analyzer = Analyzer::from_selectors(&config.analysis, &config.summary)?
        .with_profile(config.profile.clone());

    tracing::info!(
        "comparing {} and {} with weights {}",
        config.files[0].display(),
        config.files[1].display(),
        config.weights.display()
    );
    let weights = load_weights(&config.weights)?;
    let pair = load_matrices([&config.files[0], &config.files[1]])?;
    let outcome = analyzer.run(&pair, &weights)?;

    let files: [&Path; 2] = [&config.files[0], &config.files[1]];
    let report = ComparisonReport::new(files, &config.weights, &analyzer, &pair, outcome);
    render(&report, config.format).map_err(|e| CompareError::Io {
        path: PathBuf::from("<stdout>"),
        source: e.into(),
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
