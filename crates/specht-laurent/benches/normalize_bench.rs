//! Benchmarks for coefficient run expansion.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use specht_laurent::{Grading, LaurentPoly, SparseLaurent};
use specht_rings::Z;

fn sparse_run(len: usize) -> SparseLaurent {
    let coefficients: Vec<i64> = (0..len).map(|i| (i as i64 % 7) - 3).collect();
    SparseLaurent::new(-(len as i64 / 2), coefficients)
}

fn bench_generator_expansion(c: &mut Criterion) {
    let grading = Grading::<Z>::default();
    let mut group = c.benchmark_group("expand_generator");
    for size in [8usize, 64, 512] {
        let run = sparse_run(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &run, |b, run| {
            b.iter(|| black_box(grading.polynomial(run)));
        });
    }
    group.finish();
}

fn bench_composite_expansion(c: &mut Criterion) {
    let grading = Grading::<Z>::with_indeterminate("w", LaurentPoly::monomial(2));
    let mut group = c.benchmark_group("expand_composite");
    for size in [8usize, 64, 256] {
        let run = SparseLaurent::new(0, (0..size).map(|i| (i % 5) as i64).collect());
        group.bench_with_input(BenchmarkId::from_parameter(size), &run, |b, run| {
            b.iter(|| black_box(grading.polynomial(run)));
        });
    }
    group.finish();
}

fn bench_polynomial_product(c: &mut Criterion) {
    let grading = Grading::<Z>::default();
    let a = grading.polynomial(&sparse_run(64)).unwrap();
    let b = grading.polynomial(&sparse_run(96)).unwrap();
    c.bench_function("laurent_mul_64x96", |bench| {
        bench.iter(|| black_box(&a * &b));
    });
}

criterion_group!(
    benches,
    bench_generator_expansion,
    bench_composite_expansion,
    bench_polynomial_product
);
criterion_main!(benches);
