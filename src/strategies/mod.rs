//! The three work-distribution strategies behind a common trait.
//!
//! All strategies split the multiply into one unit of work per output
//! column and run the identical column kernel; what differs is how the
//! columns reach the workers:
//!
//! - [`Sequential`]: every column on the calling thread (the baseline)
//! - [`AtomicCounter`]: pull-based, workers claim columns from a shared
//!   atomic cursor
//! - [`TaskQueue`]: push-based, one task per column on a managed pool

pub mod atomic_counter;
pub mod sequential;
pub mod task_queue;

pub use atomic_counter::AtomicCounter;
pub use sequential::Sequential;
pub use task_queue::TaskQueue;

use crate::error::Error;
use crate::matrix::Matrix;

/// Worker count used by both parallel strategies unless overridden.
pub const DEFAULT_WORKERS: usize = 4;

/// A matrix-multiply capability: compute C = A * B in full.
///
/// The benchmark driver holds strategies as `Box<dyn MatMul>` and treats
/// them uniformly, so the implementations stay structurally independent.
pub trait MatMul: Send + Sync {
    /// Short name used in console reports.
    fn name(&self) -> &'static str;

    /// Compute `c = a * b`, overwriting every cell of `c`.
    fn multiply(&self, a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<(), Error>;
}

/// Validate the multiply preconditions shared by every strategy.
///
/// Checked before any computation begins; the error names which pairing
/// failed.
pub fn check_dimensions(a: &Matrix, b: &Matrix, c: &Matrix) -> Result<(), Error> {
    if a.cols() != b.rows() {
        return Err(Error::DimensionMismatch {
            constraint: "columns of A must equal rows of B",
            left: a.cols(),
            right: b.rows(),
        });
    }
    if a.rows() != c.rows() {
        return Err(Error::DimensionMismatch {
            constraint: "rows of A must equal rows of C",
            left: a.rows(),
            right: c.rows(),
        });
    }
    if b.cols() != c.cols() {
        return Err(Error::DimensionMismatch {
            constraint: "columns of B must equal columns of C",
            left: b.cols(),
            right: c.cols(),
        });
    }
    Ok(())
}
