use std::str::FromStr;

use crate::error::{CompareError, Selector};
use crate::model::{SamplePair, WeightVector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceKind {
    /// `sum(w * |a - b|)` per sample.
    AbsoluteWeighted,
    /// `sqrt(sum(w * (a - b)^2))` per sample.
    EuclideanWeighted,
}

impl DistanceKind {
    pub const EXPECTED: &'static str = "x, y";

    pub fn selector(self) -> &'static str {
        match self {
            DistanceKind::AbsoluteWeighted => "x",
            DistanceKind::EuclideanWeighted => "y",
        }
    }

    /// One discrepancy per sample row. Shapes must already be validated.
    pub fn compute(self, pair: &SamplePair, weights: &WeightVector) -> Vec<f64> {
        let w = weights.as_slice();
        pair.a
            .rows()
            .zip(pair.b.rows())
            .map(|(a, b)| match self {
                DistanceKind::AbsoluteWeighted => nansum_weighted(a, b, w, |d| d.abs()),
                DistanceKind::EuclideanWeighted => nansum_weighted(a, b, w, |d| d * d).sqrt(),
            })
            .collect()
    }
}

impl FromStr for DistanceKind {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(DistanceKind::AbsoluteWeighted),
            "y" => Ok(DistanceKind::EuclideanWeighted),
            other => Err(CompareError::InvalidArgument {
                selector: Selector::Analysis,
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

/// Sums `w[c] * f(a[c] - b[c])`, skipping NaN terms. An all-NaN row sums to 0.
pub fn nansum_weighted(a: &[f64], b: &[f64], w: &[f64], f: impl Fn(f64) -> f64) -> f64 {
    let mut sum = 0f64;
    for ((&x, &y), &wc) in a.iter().zip(b).zip(w) {
        let term = wc * f(x - y);
        if !term.is_nan() {
            sum += term;
        }
    }
    sum
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_distance.rs"]
mod tests;
