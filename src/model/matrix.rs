/// Row-major grid of measurements: one row per sample, one column per variable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleMatrix {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl SampleMatrix {
    /// Builds a matrix from parsed rows. On a ragged row, returns the index of
    /// the first row whose length differs from the first row.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, usize> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(rows.len() * cols);
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(idx);
            }
            values.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            values,
        })
    }

    pub fn n_rows(&self) -> usize {
        self.rows
    }

    pub fn n_cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.cols;
        &self.values[start..start + self.cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.rows).map(move |r| self.row(r))
    }
}

/// The two sample sets being compared.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePair {
    pub a: SampleMatrix,
    pub b: SampleMatrix,
}

impl SamplePair {
    pub fn new(a: SampleMatrix, b: SampleMatrix) -> Self {
        Self { a, b }
    }

    pub fn swapped(&self) -> Self {
        Self {
            a: self.b.clone(),
            b: self.a.clone(),
        }
    }
}

/// Per-column multipliers applied when comparing the two matrices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn has_negative(&self) -> bool {
        self.0.iter().any(|&w| w < 0.0)
    }
}
