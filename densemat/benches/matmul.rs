//! Benchmarks for the matrix product and the traversals it is built on.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use densemat::Matrix;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix<f64> {
    Matrix::from_fn(rows, cols, |_, _| rng.gen_range(-1.0..1.0))
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    let mut rng = StdRng::seed_from_u64(42);

    for &size in &[16usize, 64, 128] {
        group.throughput(Throughput::Elements((size * size * size) as u64));

        let left = random_matrix(&mut rng, size, size);
        let right = random_matrix(&mut rng, size, size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(&left) * black_box(&right));
        });
    }

    group.finish();
}

fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    let mut rng = StdRng::seed_from_u64(7);
    let size = 512;
    let matrix = random_matrix(&mut rng, size, size);
    group.throughput(Throughput::Elements((size * size) as u64));

    group.bench_function("rows", |b| {
        b.iter(|| {
            (0..size)
                .map(|i| matrix.row(i).iter().sum::<f64>())
                .sum::<f64>()
        });
    });

    group.bench_function("cols", |b| {
        b.iter(|| {
            (0..size)
                .map(|j| matrix.col(j).sum::<f64>())
                .sum::<f64>()
        });
    });

    group.bench_function("elementwise_add", |b| {
        b.iter(|| black_box(&matrix) + black_box(&matrix));
    });

    group.finish();
}

criterion_group!(benches, bench_matmul, bench_traversal);
criterion_main!(benches);
