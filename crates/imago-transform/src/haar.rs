//! One-dimensional orthonormal Haar butterfly
//!
//! Both directions operate on the first `length` elements of a segment and
//! leave the rest untouched. `length` is the working size of the current
//! pyramid level.

use std::f64::consts::SQRT_2;

fn check_segment(data: &[f64], length: usize, scratch: &[f64]) {
    assert!(
        length >= 2 && length % 2 == 0,
        "Haar length must be even and at least 2, got {length}"
    );
    assert!(length <= data.len(), "Haar length {length} exceeds segment of {}", data.len());
    assert!(length <= scratch.len(), "scratch too small: {} < {length}", scratch.len());
}

/// Forward single-level Haar step.
///
/// Each pair `(a[i], a[i+1])` becomes an average at `i/2` and a detail at
/// `(i + length)/2`, both scaled by `1/sqrt(2)`.
pub fn haar_forward(data: &mut [f64], length: usize, scratch: &mut [f64]) {
    check_segment(data, length, scratch);

    let (low, high) = scratch[..length].split_at_mut(length / 2);
    for ((pair, avg), diff) in data[..length].chunks_exact(2).zip(low).zip(high) {
        *avg = (pair[0] + pair[1]) / SQRT_2;
        *diff = (pair[0] - pair[1]) / SQRT_2;
    }

    data[..length].copy_from_slice(&scratch[..length]);
}

/// Inverse single-level Haar step, the exact algebraic inverse of
/// [`haar_forward`].
pub fn haar_inverse(data: &mut [f64], length: usize, scratch: &mut [f64]) {
    check_segment(data, length, scratch);

    let (low, high) = data[..length].split_at(length / 2);
    for ((pair, avg), diff) in scratch[..length].chunks_exact_mut(2).zip(low).zip(high) {
        pair[0] = (avg + diff) / SQRT_2;
        pair[1] = (avg - diff) / SQRT_2;
    }

    data[..length].copy_from_slice(&scratch[..length]);
}
