//! Row-major `f32` matrices and the exact-equality check used to
//! cross-verify strategy outputs.

use rand::Rng;

use crate::error::Error;

/// A dense row-major matrix of single-precision floats.
///
/// Element `(i, j)` lives at `data[i * cols + j]`. The flat layout is what
/// the strategies share across threads; accessors exist for tests and the
/// driver's verification pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// A zero-initialized rows × cols matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// A rows × cols matrix with independent uniform entries in `[0, 1)`.
    pub fn random(rows: usize, cols: usize) -> Self {
        let mut rng = rand::rng();
        let data = (0..rows * cols).map(|_| rng.random::<f32>()).collect();
        Matrix { rows, cols, data }
    }

    /// Build a matrix from explicit rows. Handy in tests.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    pub fn from_rows(rows: &[&[f32]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(height * width);
        for row in rows {
            assert_eq!(row.len(), width, "all rows must have the same length");
            data.extend_from_slice(row);
        }
        Matrix {
            rows: height,
            cols: width,
            data,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col]
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable view of the underlying row-major buffer.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

/// Verify that `candidate` matches `reference` cell for cell.
///
/// Comparison is on the raw bit pattern, so a NaN or signed-zero
/// divergence cannot slip through. Returns a structured error naming the
/// diverging strategy and the first mismatching cell.
pub fn verify_equal(
    reference: &Matrix,
    candidate: &Matrix,
    strategy: &'static str,
) -> Result<(), Error> {
    if reference.rows != candidate.rows || reference.cols != candidate.cols {
        return Err(Error::ShapeMismatch { strategy });
    }
    for row in 0..reference.rows {
        for col in 0..reference.cols {
            let expected = reference.get(row, col);
            let actual = candidate.get(row, col);
            if expected.to_bits() != actual.to_bits() {
                return Err(Error::ResultMismatch {
                    strategy,
                    row,
                    col,
                    expected,
                    actual,
                });
            }
        }
    }
    Ok(())
}
