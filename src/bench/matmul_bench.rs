//! Criterion comparison of the three strategies across matrix sizes.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use mtmatmul::{AtomicCounter, DEFAULT_WORKERS, MatMul, Matrix, Sequential, TaskQueue};

fn bench_strategies(crit: &mut Criterion) {
    let mut group = crit.benchmark_group("strategies");
    group.sample_size(10);

    let strategies: Vec<Box<dyn MatMul>> = vec![
        Box::new(Sequential),
        Box::new(AtomicCounter::new(DEFAULT_WORKERS)),
        Box::new(TaskQueue::new(DEFAULT_WORKERS)),
    ];

    for size in [64, 128, 256, 400] {
        let a = Matrix::random(size, size);
        let b = Matrix::random(size, size);
        let flops = 2 * size * size * size;
        group.throughput(Throughput::Elements(flops as u64));

        for strategy in &strategies {
            let id = BenchmarkId::new(strategy.name(), size);
            group.bench_function(id, |bench| {
                let mut c = Matrix::zeros(size, size);
                bench.iter(|| {
                    strategy
                        .multiply(&a, &b, &mut c)
                        .expect("dimensions are consistent");
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
