//! Weighted discrepancy analysis between two paired sample measurement files.

pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;

pub use error::{CompareError, Stage};
pub use input::{load_matrices, load_weights, write_matrix};
pub use model::{SampleMatrix, SamplePair, WeightVector};
pub use pipeline::stage2_distance::DistanceKind;
pub use pipeline::stage3_summary::{SummaryKind, SummaryValue};
pub use pipeline::{Analyzer, Outcome, analyse, compare_samples};
