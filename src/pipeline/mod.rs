//! Comparison pipeline: validate shapes, compute per-sample discrepancies,
//! then reduce them to a single summary value.

use std::path::Path;

pub mod stage1_validate;
pub mod stage2_distance;
pub mod stage3_summary;

use stage1_validate::validate_shapes;
use stage2_distance::DistanceKind;
use stage3_summary::{SummaryKind, SummaryValue};

use crate::error::CompareError;
use crate::input::{load_matrices, load_weights};
use crate::model::thresholds::AnalysisProfile;
use crate::model::{SamplePair, WeightVector};

#[derive(Debug, Clone, PartialEq)]
pub struct Analyzer {
    pub distance: DistanceKind,
    pub summary: SummaryKind,
    pub profile: AnalysisProfile,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub discrepancy: Vec<f64>,
    pub value: SummaryValue,
    pub notice: String,
}

impl Analyzer {
    pub fn new(distance: DistanceKind, summary: SummaryKind) -> Self {
        Self {
            distance,
            summary,
            profile: AnalysisProfile::default_v1(),
        }
    }

    /// Parses both selectors up front so an unknown one fails before any work.
    pub fn from_selectors(analysis: &str, summary: &str) -> Result<Self, CompareError> {
        let distance = analysis.parse::<DistanceKind>()?;
        let summary = summary.parse::<SummaryKind>()?;
        Ok(Self::new(distance, summary))
    }

    pub fn with_profile(mut self, profile: AnalysisProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn run(&self, pair: &SamplePair, weights: &WeightVector) -> Result<Outcome, CompareError> {
        validate_shapes(pair, weights)?;
        tracing::debug!(
            "comparing {} samples x {} variables with analysis {}",
            pair.a.n_rows(),
            pair.a.n_cols(),
            self.distance.selector()
        );
        let discrepancy = self.distance.compute(pair, weights);
        let value = self.summary.compute(&discrepancy, &self.profile)?;
        let notice = self.summary.notice(value, &self.profile);
        Ok(Outcome {
            discrepancy,
            value,
            notice,
        })
    }
}

/// String-keyed entry point over already-loaded data.
pub fn analyse(
    pair: &SamplePair,
    weights: &WeightVector,
    analysis: &str,
    summary: &str,
) -> Result<SummaryValue, CompareError> {
    let analyzer = Analyzer::from_selectors(analysis, summary)?;
    analyzer.run(pair, weights).map(|outcome| outcome.value)
}

/// Loads two sample files and a weights file, then runs the analysis.
pub fn compare_samples(
    path_a: &Path,
    path_b: &Path,
    weights_path: &Path,
    analysis: &str,
    summary: &str,
) -> Result<SummaryValue, CompareError> {
    let analyzer = Analyzer::from_selectors(analysis, summary)?;
    let weights = load_weights(weights_path)?;
    let pair = load_matrices([path_a, path_b])?;
    analyzer.run(&pair, &weights).map(|outcome| outcome.value)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/analyzer.rs"]
mod tests;
