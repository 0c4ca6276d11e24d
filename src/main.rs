//! Benchmark driver: times the three strategies and cross-checks their
//! results.

use anyhow::Context;

use mtmatmul::{
    AtomicCounter, DEFAULT_WORKERS, MatMul, Matrix, Sequential, Stopwatch, TaskQueue, verify_equal,
};

/// Rows of A, and both dimensions of the square output C.
const M: usize = 400;
/// Columns of A and rows of B (the contraction dimension).
const N: usize = 600;
const TRIALS: usize = 5;
/// Wall-clock budget per strategy per trial, in seconds.
const TIME_BUDGET: f64 = 1.0;

fn main() -> anyhow::Result<()> {
    let a = Matrix::random(M, N);
    let b = Matrix::random(N, M);

    let strategies: Vec<Box<dyn MatMul>> = vec![
        Box::new(Sequential),
        Box::new(AtomicCounter::new(DEFAULT_WORKERS)),
        Box::new(TaskQueue::new(DEFAULT_WORKERS)),
    ];
    // One output per strategy so repeated runs can never interfere.
    let mut outputs: Vec<Matrix> = strategies.iter().map(|_| Matrix::zeros(M, M)).collect();

    println!("seq    = single-threaded column sweep");
    println!("atomic = atomic-counter worker threads");
    println!("pool   = thread-pool task queue");

    // 2 * M * M * N flops per invocation, reported in mflops.
    let mflops = 2.0e-6 * (M * M * N) as f64;
    let mut sw = Stopwatch::new();

    for _ in 0..TRIALS {
        println!();
        for (strategy, c) in strategies.iter().zip(outputs.iter_mut()) {
            sw.restart();
            let mut nmul = 0u64;
            // Stop launching once the budget is spent; the last
            // invocation always runs to completion.
            while sw.time() < TIME_BUDGET {
                strategy
                    .multiply(&a, &b, c)
                    .with_context(|| format!("{} multiply failed", strategy.name()))?;
                nmul += 1;
            }
            sw.stop();
            let rate = (nmul as f64 * mflops / sw.time()) as u64;
            println!("{}: rate={} mflops", strategy.name(), rate);
        }
    }

    // Hard invariant, not a metric: the parallel strategies must
    // reproduce the sequential result exactly.
    let (reference, candidates) = outputs.split_first().expect("at least one strategy");
    for (strategy, candidate) in strategies.iter().skip(1).zip(candidates) {
        verify_equal(reference, candidate, strategy.name())
            .context("cross-strategy result check failed")?;
    }

    Ok(())
}
