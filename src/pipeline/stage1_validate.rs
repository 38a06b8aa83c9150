use crate::error::CompareError;
use crate::model::{SamplePair, WeightVector};

/// Both matrices must share a shape and the weights must cover every column.
/// With zero samples there is nothing to weigh, so the weight length is not checked.
pub fn validate_shapes(pair: &SamplePair, weights: &WeightVector) -> Result<(), CompareError> {
    if pair.a.shape() != pair.b.shape() {
        return Err(CompareError::ShapeMismatch(format!(
            "sample matrices differ: {}x{} vs {}x{}",
            pair.a.n_rows(),
            pair.a.n_cols(),
            pair.b.n_rows(),
            pair.b.n_cols()
        )));
    }
    if !pair.a.is_empty() && weights.len() != pair.a.n_cols() {
        return Err(CompareError::ShapeMismatch(format!(
            "{} weights for {} variables",
            weights.len(),
            pair.a.n_cols()
        )));
    }
    Ok(())
}
