//! Pull-based strategy: freshly spawned workers claim columns from a
//! shared atomic cursor.

use std::slice;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use super::{DEFAULT_WORKERS, MatMul, check_dimensions};
use crate::error::Error;
use crate::kernels::column::compute_column;
use crate::matrix::Matrix;

/// Shared claim counter that hands out each index in `[0, limit)` to
/// exactly one competing worker.
///
/// Claims advance the position by exactly one and never move it past
/// `limit`, so after a full drain `position()` equals the number of items
/// handed out. Lock-free; contention is a single integer update.
pub struct WorkCursor {
    next: AtomicUsize,
    limit: usize,
}

impl WorkCursor {
    pub fn new(limit: usize) -> Self {
        WorkCursor {
            next: AtomicUsize::new(0),
            limit,
        }
    }

    /// Atomically claim the next index, or `None` once the range is
    /// drained. No index is ever handed out twice.
    pub fn claim(&self) -> Option<usize> {
        let mut current = self.next.load(Ordering::Relaxed);
        loop {
            if current >= self.limit {
                return None;
            }
            match self.next.compare_exchange_weak(
                current,
                current + 1,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(claimed) => return Some(claimed),
                Err(observed) => current = observed,
            }
        }
    }

    /// Current cursor position. Equals `limit` after a full drain.
    pub fn position(&self) -> usize {
        self.next.load(Ordering::Relaxed)
    }
}

/// Work-claiming strategy with manual thread lifecycle.
///
/// Spawns a fixed number of worker threads per invocation — deliberately
/// not pooled, as the contrast with [`TaskQueue`](super::TaskQueue) is
/// the point of the benchmark. Each worker owns a private scratch buffer
/// and pulls column indices from a [`WorkCursor`] until it is drained, so
/// the distribution is self-balancing: slower workers simply claim fewer
/// columns. The invoking thread blocks only at the final joins.
#[derive(Debug)]
pub struct AtomicCounter {
    workers: usize,
}

impl AtomicCounter {
    /// # Panics
    ///
    /// Panics if `workers` is zero.
    pub fn new(workers: usize) -> Self {
        assert!(workers > 0, "need at least one worker");
        AtomicCounter { workers }
    }
}

impl Default for AtomicCounter {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS)
    }
}

impl MatMul for AtomicCounter {
    fn name(&self) -> &'static str {
        "atomic"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<(), Error> {
        check_dimensions(a, b, c)?;
        let (m, n, k) = (c.rows(), c.cols(), b.rows());
        let (a_buf, b_buf) = (a.as_slice(), b.as_slice());
        let cursor = WorkCursor::new(n);
        // Workers write disjoint columns of C, never the same cell, so
        // they share the output buffer through a raw pointer with no
        // locking. The joins below order those writes before the caller
        // reads C again.
        let c_addr = c.as_mut_slice().as_mut_ptr() as usize;

        thread::scope(|scope| {
            let workers: Vec<_> = (0..self.workers)
                .map(|_| {
                    let cursor = &cursor;
                    scope.spawn(move || {
                        let mut bj = vec![0.0f32; k];
                        let c_buf =
                            unsafe { slice::from_raw_parts_mut(c_addr as *mut f32, m * n) };
                        while let Some(j) = cursor.claim() {
                            compute_column(a_buf, b_buf, c_buf, m, n, k, j, &mut bj);
                        }
                    })
                })
                .collect();

            for worker in workers {
                worker.join().map_err(|_| Error::WorkerPanicked {
                    strategy: self.name(),
                })?;
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    #[test]
    fn drains_in_order_single_threaded() {
        let cursor = WorkCursor::new(5);
        let claimed: Vec<_> = std::iter::from_fn(|| cursor.claim()).collect();
        assert_eq!(claimed, vec![0, 1, 2, 3, 4]);
        assert_eq!(cursor.claim(), None);
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn empty_range_claims_nothing() {
        let cursor = WorkCursor::new(0);
        assert_eq!(cursor.claim(), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn concurrent_drain_claims_each_index_exactly_once() {
        let columns = 512;
        let cursor = WorkCursor::new(columns);
        let claims: Vec<AtomicU32> = (0..columns).map(|_| AtomicU32::new(0)).collect();

        thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    while let Some(j) = cursor.claim() {
                        claims[j].fetch_add(1, Ordering::Relaxed);
                    }
                });
            }
        });

        for (j, count) in claims.iter().enumerate() {
            assert_eq!(count.load(Ordering::Relaxed), 1, "column {j}");
        }
        assert_eq!(cursor.position(), columns);
    }
}
