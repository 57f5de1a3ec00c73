//! Benchmarks for the hive layout engine
//!
//! Measures performance of:
//! - Spiral generation
//! - Index/coordinate conversions
//! - Placement and bounding box computation
//! - Viewport fitting

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hivemap_layout::{
    bounding_box, coord_to_spiral, generate, place, spiral_to_coord, HexGeometry, SpiralIndex,
    ViewportFitter,
};

/// Benchmark generating the first N cells
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for &count in &[10usize, 100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            b.iter(|| generate(black_box(n)))
        });
    }
    group.finish();
}

/// Benchmark spiral index to coordinate conversion
fn bench_spiral_to_coord(c: &mut Criterion) {
    let mut group = c.benchmark_group("spiral_to_coord");

    for &index in &[0u64, 10, 1_000, 100_000, 10_000_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(index), &index, |b, &idx| {
            b.iter(|| spiral_to_coord(black_box(SpiralIndex(idx))))
        });
    }
    group.finish();
}

/// Benchmark round-trip conversion
fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    for &index in &[0u64, 100, 10_000, 1_000_000] {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(index), &index, |b, &idx| {
            b.iter(|| coord_to_spiral(spiral_to_coord(SpiralIndex(black_box(idx)))))
        });
    }
    group.finish();
}

/// Benchmark a full layout pass: place, bound, fit
fn bench_layout_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_pass");
    let geometry = HexGeometry::default();
    let fitter = ViewportFitter::default();

    for &count in &[50usize, 500, 5_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &n| {
            b.iter(|| {
                let placed = place(0..black_box(n), &geometry);
                let bounds = bounding_box(&placed, &geometry);
                fitter.fit(&bounds, 1920.0, 1080.0)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_generate,
    bench_spiral_to_coord,
    bench_roundtrip,
    bench_layout_pass,
);

criterion_main!(benches);
