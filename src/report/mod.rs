use std::path::Path;

use serde::Serialize;

use crate::model::SamplePair;
use crate::pipeline::stage3_summary::SummaryValue;
use crate::pipeline::{Analyzer, Outcome};

pub mod json;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub tool: String,
    pub version: String,
    pub files: [String; 2],
    pub weights: String,
    pub analysis: &'static str,
    pub summary: &'static str,
    pub criticality_threshold: f64,
    pub n_samples: usize,
    pub n_variables: usize,
    pub discrepancy: Vec<f64>,
    pub result: SummaryValue,
    pub notice: String,
}

impl ComparisonReport {
    pub fn new(
        files: [&Path; 2],
        weights: &Path,
        analyzer: &Analyzer,
        pair: &SamplePair,
        outcome: Outcome,
    ) -> Self {
        Self {
            tool: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            files: files.map(|p| p.display().to_string()),
            weights: weights.display().to_string(),
            analysis: analyzer.distance.selector(),
            summary: analyzer.summary.selector(),
            criticality_threshold: analyzer.profile.criticality_threshold,
            n_samples: pair.a.n_rows(),
            n_variables: pair.a.n_cols(),
            discrepancy: outcome.discrepancy,
            result: outcome.value,
            notice: outcome.notice,
        }
    }
}

pub fn render(
    report: &ComparisonReport,
    format: ReportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(text::render_report_text(report)),
        ReportFormat::Json => json::render_report_json(report),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
