//! Push-based strategy: one task per column submitted to a managed pool.

use std::slice;

use crossbeam::channel;

use super::{DEFAULT_WORKERS, MatMul, check_dimensions};
use crate::error::Error;
use crate::kernels::column::compute_column;
use crate::matrix::Matrix;

/// Task-queue strategy over a bounded thread pool.
///
/// Submits one independent unit of work per output column to a rayon pool
/// built (and torn down) per invocation, then counts exactly one
/// completion signal per submitted task. Completions are counted, not
/// matched to particular columns. Scheduling overhead is paid per column,
/// which is the trade-off this strategy exists to measure against the
/// per-claim cost of [`AtomicCounter`](super::AtomicCounter).
#[derive(Debug)]
pub struct TaskQueue {
    workers: usize,
}

impl TaskQueue {
    /// # Panics
    ///
    /// Panics if `workers` is zero.
    pub fn new(workers: usize) -> Self {
        assert!(workers > 0, "need at least one worker");
        TaskQueue { workers }
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS)
    }
}

impl MatMul for TaskQueue {
    fn name(&self) -> &'static str {
        "pool"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<(), Error> {
        check_dimensions(a, b, c)?;
        let (m, n, k) = (c.rows(), c.cols(), b.rows());
        let (a_buf, b_buf) = (a.as_slice(), b.as_slice());
        // Tasks write disjoint columns of C; the scope join orders the
        // writes before the counting loop below.
        let c_addr = c.as_mut_slice().as_mut_ptr() as usize;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .map_err(|e| Error::PoolBuild(e.to_string()))?;
        let (done_tx, done_rx) = channel::unbounded::<()>();

        pool.scope(|scope| {
            for j in 0..n {
                let done = done_tx.clone();
                scope.spawn(move |_| {
                    // Private scratch per task; tasks never share buffers.
                    let mut bj = vec![0.0f32; k];
                    let c_buf = unsafe { slice::from_raw_parts_mut(c_addr as *mut f32, m * n) };
                    compute_column(a_buf, b_buf, c_buf, m, n, k, j, &mut bj);
                    let _ = done.send(());
                });
            }
        });
        drop(done_tx);

        // One receive per submitted task. Every sender is gone by now, so
        // a shortfall surfaces as a receive error instead of a hang.
        let mut completed = 0;
        for _ in 0..n {
            match done_rx.recv() {
                Ok(()) => completed += 1,
                Err(_) => {
                    return Err(Error::TasksIncomplete {
                        submitted: n,
                        completed,
                    });
                }
            }
        }
        Ok(())
    }
}
