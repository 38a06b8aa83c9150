use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub mod reader;
pub mod rows;

use rows::{ParsedRow, format_row, read_rows};

use crate::error::CompareError;
use crate::model::{SampleMatrix, SamplePair, WeightVector};

/// Loads the two sample files. Shapes are not compared here; the analyzer
/// checks them before any distance is computed.
pub fn load_matrices<P: AsRef<Path>>(paths: [P; 2]) -> Result<SamplePair, CompareError> {
    let [path_a, path_b] = paths;
    let a = load_matrix(path_a.as_ref())?;
    let b = load_matrix(path_b.as_ref())?;
    Ok(SamplePair::new(a, b))
}

pub fn load_matrix(path: &Path) -> Result<SampleMatrix, CompareError> {
    let rows = read_rows(path)?;
    let line_nos: Vec<usize> = rows.iter().map(|r| r.line_no).collect();
    let matrix = SampleMatrix::from_rows(rows.into_iter().map(|r| r.values).collect()).map_err(
        |idx| CompareError::Parse {
            path: path.to_path_buf(),
            line: line_nos[idx],
            msg: "row length differs from the first row".to_string(),
        },
    )?;

    tracing::debug!(
        "loaded {}: {} samples x {} variables",
        path.display(),
        matrix.n_rows(),
        matrix.n_cols()
    );
    Ok(matrix)
}

pub fn load_weights(path: &Path) -> Result<WeightVector, CompareError> {
    let mut rows = read_rows(path)?.into_iter();
    let Some(ParsedRow { values, .. }) = rows.next() else {
        return Err(CompareError::Parse {
            path: path.to_path_buf(),
            line: 0,
            msg: "weights file is empty".to_string(),
        });
    };
    if let Some(extra) = rows.next() {
        return Err(CompareError::Parse {
            path: path.to_path_buf(),
            line: extra.line_no,
            msg: "weights file must contain a single row".to_string(),
        });
    }

    let weights = WeightVector::new(values);
    if weights.has_negative() {
        tracing::warn!(
            "weights in {} contain negative values; euclidean discrepancies may be NaN",
            path.display()
        );
    }
    Ok(weights)
}

pub fn write_matrix(path: &Path, matrix: &SampleMatrix) -> Result<(), CompareError> {
    let file = File::create(path).map_err(|e| CompareError::io(path, e))?;
    let mut out = BufWriter::new(file);
    for row in matrix.rows() {
        writeln!(out, "{}", format_row(row)).map_err(|e| CompareError::io(path, e))?;
    }
    out.flush().map_err(|e| CompareError::io(path, e))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
