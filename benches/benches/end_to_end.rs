//! End-to-end compression benchmarks
//!
//! Run with: cargo bench --bench end_to_end

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use imago_compress::compress;
use imago_core::*;
use imago_ops::{convolve, Kernel};

fn create_test_image(width: u32, height: u32) -> Image {
    let mut image = Image::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            image.set_pixel(
                x,
                y,
                Pixel::new(x as f64 / width as f64, y as f64 / height as f64, 0.5, 1.0),
            );
        }
    }
    image
}

fn bench_compress_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("Compress by Image Size");

    // non-square and non-power-of-two sizes exercise the padding
    for &(width, height) in &[(64, 64), (200, 120), (512, 512)] {
        let image = create_test_image(width, height);
        group.throughput(Throughput::Elements(image.pixel_count() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &image,
            |b, image| b.iter(|| compress(black_box(image), 0.8).unwrap()),
        );
    }

    group.finish();
}

fn bench_convolve(c: &mut Criterion) {
    let image = create_test_image(256, 256);
    c.bench_function("convolve_256x256_sharpen", |b| {
        b.iter(|| convolve(black_box(&image), Kernel::Sharpen).unwrap())
    });
}

criterion_group!(benches, bench_compress_by_size, bench_convolve);
criterion_main!(benches);
