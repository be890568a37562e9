//! Races the i-j-k reference kernel against the i-k-j loop order.
//!
//! Both kernels do the same checked arithmetic; the only difference is
//! memory access order, so the gap here is pure cache behavior.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use matcheck::{Matrix, multiply, multiply_ikj};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SIZES: &[usize] = &[64, 128, 256];

fn matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");

    for &size in SIZES {
        let mut rng = StdRng::seed_from_u64(0);
        let a = Matrix::random(&mut rng, size, size);
        let b = Matrix::random(&mut rng, size, size);

        group.bench_with_input(BenchmarkId::new("ijk", size), &(), |bench, _| {
            bench.iter(|| multiply(&a, &b).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("ikj", size), &(), |bench, _| {
            bench.iter(|| multiply_ikj(&a, &b).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, matmul);
criterion_main!(benches);
