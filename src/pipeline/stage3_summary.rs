use std::str::FromStr;

use serde::Serialize;

use crate::error::{CompareError, Selector};
use crate::model::thresholds::AnalysisProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryKind {
    /// Number of samples whose discrepancy exceeds the criticality threshold.
    CriticalityCount,
    /// Mean discrepancy over all samples.
    AverageIndex,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SummaryValue {
    Count(usize),
    Index(f64),
}

impl std::fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryValue::Count(n) => write!(f, "{n}"),
            SummaryValue::Index(v) => write!(f, "{v}"),
        }
    }
}

impl SummaryKind {
    pub const EXPECTED: &'static str = "criticality, d";

    pub fn selector(self) -> &'static str {
        match self {
            SummaryKind::CriticalityCount => "criticality",
            SummaryKind::AverageIndex => "d",
        }
    }

    pub fn compute(
        self,
        discrepancy: &[f64],
        profile: &AnalysisProfile,
    ) -> Result<SummaryValue, CompareError> {
        let value = match self {
            SummaryKind::CriticalityCount => {
                SummaryValue::Count(count_above(discrepancy, profile.criticality_threshold))
            }
            SummaryKind::AverageIndex => SummaryValue::Index(mean(discrepancy)?),
        };
        tracing::info!("{}", self.notice(value, profile));
        Ok(value)
    }

    pub fn notice(self, value: SummaryValue, profile: &AnalysisProfile) -> String {
        match self {
            SummaryKind::CriticalityCount => format!(
                "criticality: {} results above {}",
                value, profile.criticality_threshold
            ),
            SummaryKind::AverageIndex => format!("d-index: {value}"),
        }
    }
}

impl FromStr for SummaryKind {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "criticality" => Ok(SummaryKind::CriticalityCount),
            "d" => Ok(SummaryKind::AverageIndex),
            other => Err(CompareError::InvalidArgument {
                selector: Selector::Summary,
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

/// Strict comparison, so NaN entries never count.
pub fn count_above(values: &[f64], threshold: f64) -> usize {
    values.iter().filter(|&&v| v > threshold).count()
}

pub fn mean(values: &[f64]) -> Result<f64, CompareError> {
    if values.is_empty() {
        return Err(CompareError::EmptyInput);
    }
    let sum: f64 = values.iter().sum();
    Ok(sum / values.len() as f64)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_summary.rs"]
mod tests;
