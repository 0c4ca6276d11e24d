//! Error types for the benchmark harness.
//!
//! Every error here is fatal by design: a benchmark that keeps going past
//! a dimension mismatch or a diverging result would report numbers that
//! mean nothing. Nothing is retried.

use std::error::Error as StdError;
use std::fmt;

/// All failure modes of a benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A dimension precondition among A, B and C does not hold.
    /// `constraint` names which pairing failed.
    DimensionMismatch {
        constraint: &'static str,
        left: usize,
        right: usize,
    },
    /// A strategy disagrees with the reference result at one cell.
    ResultMismatch {
        strategy: &'static str,
        row: usize,
        col: usize,
        expected: f32,
        actual: f32,
    },
    /// Output matrices being compared do not even share a shape.
    ShapeMismatch { strategy: &'static str },
    /// Joining a worker thread failed because the worker panicked.
    WorkerPanicked { strategy: &'static str },
    /// Fewer completion signals arrived than tasks were submitted.
    TasksIncomplete { submitted: usize, completed: usize },
    /// The task-queue thread pool could not be built.
    PoolBuild(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionMismatch {
                constraint,
                left,
                right,
            } => {
                write!(f, "dimension mismatch: {constraint} ({left} != {right})")
            }
            Error::ResultMismatch {
                strategy,
                row,
                col,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "result mismatch: {strategy} diverged at ({row}, {col}): \
                     expected {expected}, got {actual}"
                )
            }
            Error::ShapeMismatch { strategy } => {
                write!(f, "result mismatch: {strategy} produced a different shape")
            }
            Error::WorkerPanicked { strategy } => {
                write!(f, "a {strategy} worker thread panicked")
            }
            Error::TasksIncomplete {
                submitted,
                completed,
            } => {
                write!(
                    f,
                    "completion count mismatch: {completed} of {submitted} tasks signalled"
                )
            }
            Error::PoolBuild(msg) => write!(f, "could not build thread pool: {msg}"),
        }
    }
}

impl StdError for Error {}
