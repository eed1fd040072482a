//! Benchmarks for Haar transform operations
//!
//! Run with: cargo bench --bench transforms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use imago_core::consts::COEFFICIENT_EPSILON;
use imago_core::Dimensions;
use imago_transform::{haar2d_forward, haar2d_inverse, haar_forward, haar_inverse, threshold, PlaneBuffer};

fn create_plane(size: usize) -> PlaneBuffer {
    let samples: Vec<f64> = (0..size * size).map(|i| ((i * 37) % 256) as f64 / 255.0).collect();
    PlaneBuffer::from_plane(&samples, Dimensions::new(size as u32, size as u32)).unwrap()
}

fn bench_haar_1d(c: &mut Criterion) {
    let mut group = c.benchmark_group("Haar 1D");

    let input: Vec<f64> = (0..1024).map(|i| (i as f64) / 1024.0).collect();
    let mut scratch = vec![0.0; 1024];

    group.bench_function("haar_1024_roundtrip", |b| {
        b.iter(|| {
            let mut data = input.clone();
            haar_forward(black_box(&mut data), 1024, &mut scratch);
            haar_inverse(black_box(&mut data), 1024, &mut scratch);
            data
        });
    });

    group.finish();
}

fn bench_pyramid(c: &mut Criterion) {
    let mut group = c.benchmark_group("Haar 2D Pyramid");

    for &size in &[64, 256, 1024] {
        let plane = create_plane(size);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("forward", size), &size, |b, _| {
            b.iter(|| {
                let mut buffer = plane.clone();
                haar2d_forward(black_box(&mut buffer));
                buffer
            });
        });

        let mut transformed = plane.clone();
        haar2d_forward(&mut transformed);
        group.bench_with_input(BenchmarkId::new("inverse", size), &size, |b, _| {
            b.iter(|| {
                let mut buffer = transformed.clone();
                haar2d_inverse(black_box(&mut buffer));
                buffer
            });
        });
    }

    group.finish();
}

fn bench_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("Threshold");

    let mut transformed = create_plane(512);
    haar2d_forward(&mut transformed);

    for &ratio in &[0.5, 0.9] {
        group.bench_with_input(BenchmarkId::from_parameter(ratio), &ratio, |b, &ratio| {
            b.iter(|| {
                let mut buffer = transformed.clone();
                threshold(black_box(&mut buffer), ratio, COEFFICIENT_EPSILON).unwrap();
                buffer
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_haar_1d, bench_pyramid, bench_threshold);
criterion_main!(benches);
