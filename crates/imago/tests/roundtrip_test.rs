//! Integration tests for Haar compression round trips

use imago::transform::{haar2d_forward, haar2d_inverse, threshold, PlaneBuffer};
use imago::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const TOLERANCE: f64 = 1e-9;

/// Helper function to create an image filled with seeded noise
fn create_test_image(width: u32, height: u32, seed: u64) -> Image {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut image = Image::new(width, height).unwrap();
    for channel in Channel::ALL {
        for sample in image.plane_mut(channel) {
            *sample = rng.random::<f64>();
        }
    }
    image
}

/// Forward-transformed random plane
fn transformed_plane(width: u32, height: u32, seed: u64) -> PlaneBuffer {
    let image = create_test_image(width, height, seed);
    let mut plane = PlaneBuffer::from_plane(image.plane(Channel::Red), image.dimensions()).unwrap();
    haar2d_forward(&mut plane);
    plane
}

#[test]
fn test_roundtrip_lossless() {
    let test_sizes = vec![(1, 1), (2, 2), (5, 3), (2, 7), (16, 16), (33, 17)];

    for (width, height) in test_sizes {
        let original = create_test_image(width, height, (width * 31 + height) as u64);
        let compressed = compress(&original, 0.0).expect("compression failed");

        assert_eq!(compressed.dimensions(), original.dimensions());
        for channel in Channel::ALL {
            for (got, want) in compressed.plane(channel).iter().zip(original.plane(channel)) {
                assert!(
                    (got - want).abs() < TOLERANCE,
                    "{width}x{height} {}: {got} != {want}",
                    channel.name()
                );
            }
        }
    }
}

#[test]
fn test_padding_dimensions() {
    // height 3, width 5
    let original = create_test_image(5, 3, 11);
    let (compressed, report) = Compressor::new(CompressOptions::default().ratio(0.5))
        .compress_with_report(&original)
        .unwrap();

    assert_eq!(report.working_size, 8);
    assert_eq!(compressed.width(), 5);
    assert_eq!(compressed.height(), 3);
    assert!(compressed.planes().iter().all(|p| p.len() == 15));
}

#[test]
fn test_2x2_scenario() {
    let dims = Dimensions::new(2, 2);
    let mut plane = PlaneBuffer::from_plane(&[1.0, 2.0, 3.0, 4.0], dims).unwrap();

    haar2d_forward(&mut plane);
    let expected = [5.0, -1.0, -2.0, 0.0];
    for (got, want) in plane.as_slice().iter().zip(expected.iter()) {
        assert!((got - want).abs() < TOLERANCE);
    }

    assert_eq!(threshold(&mut plane, 0.0, consts::COEFFICIENT_EPSILON).unwrap(), None);
    haar2d_inverse(&mut plane);
    for (got, want) in plane.crop(dims).iter().zip([1.0, 2.0, 3.0, 4.0].iter()) {
        assert!((got - want).abs() < TOLERANCE);
    }

    // the same values through the full pipeline
    let mut image = Image::new(2, 2).unwrap();
    image.plane_mut(Channel::Red).copy_from_slice(&[1.0, 2.0, 3.0, 4.0]);
    let compressed = compress(&image, 0.0).unwrap();
    for (got, want) in compressed.plane(Channel::Red).iter().zip([1.0, 2.0, 3.0, 4.0].iter()) {
        assert!((got - want).abs() < TOLERANCE);
    }
}

#[test]
fn test_energy_does_not_increase() {
    for ratio in [0.1, 0.35, 0.5, 0.8, 0.99] {
        let mut plane = transformed_plane(12, 9, 3);
        let before = plane.energy();

        threshold(&mut plane, ratio, consts::COEFFICIENT_EPSILON).unwrap();
        assert!(plane.energy() <= before, "energy grew at ratio {ratio}");
    }
}

#[test]
fn test_monotonic_degradation() {
    let plane = transformed_plane(20, 20, 5);

    let mut previous = 0;
    for step in 0..=10 {
        let ratio = step as f64 / 10.0;
        let mut candidate = plane.clone();
        threshold(&mut candidate, ratio, consts::COEFFICIENT_EPSILON).unwrap();

        let zeroed = candidate.count_zeros();
        assert!(zeroed >= previous, "ratio {ratio}: {zeroed} < {previous}");
        previous = zeroed;
    }
}

#[test]
fn test_full_ratio_zeroes_all_coefficients() {
    let mut plane = transformed_plane(8, 8, 9);
    let result = threshold(&mut plane, 1.0, consts::COEFFICIENT_EPSILON).unwrap().unwrap();

    assert_eq!(result.zeroed, 64);
    assert_eq!(plane.count_zeros(), 64);

    let original = create_test_image(8, 8, 9);
    let compressed = compress(&original, 1.0).unwrap();
    assert!(compressed.plane(Channel::Red).iter().all(|v| v.abs() < TOLERANCE));
}

#[test]
fn test_error_bounded_by_removed_energy() {
    // Orthonormality: the squared reconstruction error over the padded buffer
    // equals the energy of the zeroed coefficients.
    let dims = Dimensions::new(6, 10);
    let original = create_test_image(6, 10, 21);
    let samples = original.plane(Channel::Green);

    let mut plane = PlaneBuffer::from_plane(samples, dims).unwrap();
    haar2d_forward(&mut plane);
    let before = plane.energy();
    threshold(&mut plane, 0.6, consts::COEFFICIENT_EPSILON).unwrap();
    let removed = before - plane.energy();

    let compressed = Compressor::new(CompressOptions::default().ratio(0.6))
        .compress(&original)
        .unwrap();
    let error: f64 = compressed
        .plane(Channel::Green)
        .iter()
        .zip(samples)
        .map(|(a, b)| (a - b) * (a - b))
        .sum();

    assert!(removed > 0.0);
    assert!(error <= removed + 1e-9, "error {error} > removed {removed}");
}

#[test]
fn test_invalid_ratio_rejected() {
    let image = create_test_image(4, 4, 1);
    for ratio in [-0.1, 1.0001, f64::NAN, f64::INFINITY] {
        assert!(matches!(compress(&image, ratio), Err(ImagoError::InvalidRatio(_))));
    }
}

#[test]
fn test_uniform_image_survives_skipped_channels() {
    let mut image = Image::new(7, 5).unwrap();
    image.plane_mut(Channel::Blue).fill(0.5);

    let (compressed, report) = Compressor::new(CompressOptions::default().ratio(0.5))
        .compress_with_report(&image)
        .unwrap();

    assert_eq!(report.channels[Channel::Red.index()].outcome, ChannelOutcome::Skipped);
    assert_eq!(report.channels[Channel::Alpha.index()].outcome, ChannelOutcome::Skipped);
    assert!(compressed.plane(Channel::Red).iter().all(|v| *v == 0.0));
}
