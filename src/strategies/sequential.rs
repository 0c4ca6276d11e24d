//! Single-threaded baseline: sweep the columns in order.

use super::{MatMul, check_dimensions};
use crate::error::Error;
use crate::kernels::column::compute_column;
use crate::matrix::Matrix;

/// The reference strategy.
///
/// Computes every column in increasing order on the calling thread, with
/// one scratch buffer allocated up front and reused for all columns.
/// Deterministic; the driver checks the parallel strategies against its
/// output.
#[derive(Debug, Default)]
pub struct Sequential;

impl MatMul for Sequential {
    fn name(&self) -> &'static str {
        "seq"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<(), Error> {
        check_dimensions(a, b, c)?;
        let (m, n, k) = (c.rows(), c.cols(), b.rows());
        let (a_buf, b_buf) = (a.as_slice(), b.as_slice());
        let c_buf = c.as_mut_slice();
        let mut bj = vec![0.0f32; k];
        for j in 0..n {
            compute_column(a_buf, b_buf, c_buf, m, n, k, j, &mut bj);
        }
        Ok(())
    }
}
