//! Preallocated numeric buffers for batch sampling and reduction.
//!
//! [`SampleMatrix`] is a row-major `rows × cols` buffer. Path simulation
//! treats each row as one path and each column as one time step; the
//! reductions it needs (cumulative sum along a row, row minima) live here
//! so the simulator never indexes raw storage itself.

/// Row-major matrix of `f64` samples.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl SampleMatrix {
    /// Zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Wrap an existing row-major buffer. Returns `None` when the length does
    /// not match the shape.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        (data.len() == rows * cols).then_some(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Borrow row `i`. Panics if out of range.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Reshape to `rows × cols`, reusing the allocation. Contents are
    /// unspecified afterwards and must be overwritten by the caller.
    pub fn reshape(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.data.resize(rows * cols, 0.0);
    }

    /// Replace every row with its running (prefix) sum.
    pub fn cumsum_rows(&mut self) {
        if self.cols == 0 {
            return;
        }
        for row in self.data.chunks_exact_mut(self.cols) {
            let mut acc = 0.0;
            for v in row.iter_mut() {
                acc += *v;
                *v = acc;
            }
        }
    }

    /// Minimum of each row. A zero-width matrix yields `+inf` per row.
    pub fn row_minima(&self) -> Vec<f64> {
        if self.cols == 0 {
            return vec![f64::INFINITY; self.rows];
        }
        self.data
            .chunks_exact(self.cols)
            .map(|row| row.iter().copied().fold(f64::INFINITY, f64::min))
            .collect()
    }
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Number of values at or below `threshold`.
pub fn count_at_or_below(values: &[f64], threshold: f64) -> usize {
    values.iter().filter(|&&v| v <= threshold).count()
}
