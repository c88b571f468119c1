//! Point generation throughput benchmarks.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scangen_bench::{dense_grid, masked_grid, nested_scan};
use scangen_service::PointGeneratorService;
use std::hint::black_box;

fn bench_grid_traversal(c: &mut Criterion) {
    let service = PointGeneratorService::new();
    let mut group = c.benchmark_group("grid_traversal");
    for n in [32u64, 100, 316] {
        let gen = service
            .create_generator(&dense_grid(n))
            .expect("profile is valid");
        group.throughput(Throughput::Elements(n * n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let mut last = 0u64;
                for point in gen.iter_points() {
                    last = black_box(point.index());
                }
                last
            })
        });
    }
    group.finish();
}

fn bench_masked_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("masked_traversal");
    for n in [32u64, 100] {
        let compound = masked_grid(n);
        group.throughput(Throughput::Elements(n * n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| compound.iter_points().map(black_box).count())
        });
    }
    group.finish();
}

fn bench_nested_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_traversal");
    let compound = nested_scan(32, 10);
    group.throughput(Throughput::Elements(32 * 32 * 10));
    group.bench_function("grid_x_line", |b| {
        b.iter(|| compound.iter_points().map(black_box).count())
    });
    group.finish();
}

fn bench_compound_construction(c: &mut Criterion) {
    c.bench_function("construct_masked_grid", |b| {
        b.iter(|| black_box(masked_grid(100)))
    });
}

criterion_group!(
    benches,
    bench_grid_traversal,
    bench_masked_traversal,
    bench_nested_traversal,
    bench_compound_construction
);
criterion_main!(benches);
