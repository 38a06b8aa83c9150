pub mod matrix;
pub mod thresholds;

pub use matrix::{SampleMatrix, SamplePair, WeightVector};
