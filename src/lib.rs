//! Which work-distribution strategy multiplies matrices fastest?
//!
//! This crate benchmarks three ways of spreading a dense f32 matrix
//! multiply across worker threads. All three decompose the product into
//! one unit of work per output column and run the exact same unrolled
//! column kernel, so their outputs must match bit for bit — the only
//! thing being measured is how the columns reach the workers:
//!
//! - [`Sequential`]: all columns on the calling thread (baseline)
//! - [`AtomicCounter`]: manually spawned workers pull column indices from
//!   a shared atomic cursor (work-stealing style, self-balancing)
//! - [`TaskQueue`]: one task per column pushed onto a managed thread
//!   pool, with a completion signal counted per task
//!
//! The binary generates random inputs, times repeated invocations of each
//! strategy under a fixed wall-clock budget, reports throughput in
//! mflops, and aborts if any strategy's result diverges from the
//! sequential reference.
//!
//! ## Usage
//!
//! ```
//! use mtmatmul::{MatMul, Matrix, Sequential};
//!
//! let a = Matrix::random(8, 12);
//! let b = Matrix::random(12, 8);
//! let mut c = Matrix::zeros(8, 8);
//!
//! Sequential.multiply(&a, &b, &mut c).unwrap();
//! ```

pub mod error;
pub mod kernels;
pub mod matrix;
pub mod stopwatch;
pub mod strategies;

pub use error::Error;
pub use matrix::{Matrix, verify_equal};
pub use stopwatch::Stopwatch;
pub use strategies::{
    AtomicCounter, DEFAULT_WORKERS, MatMul, Sequential, TaskQueue, check_dimensions,
};
