//! Square power-of-two working buffer for one channel

use imago_core::{Dimensions, ImagoError, ImagoResult};

/// Smallest power of two that is `>= n`. Zero maps to 1.
pub fn next_pow2(n: usize) -> usize {
    n.max(1).next_power_of_two()
}

/// A `size x size` row-major buffer of samples, `size` a power of two.
///
/// A plane of `width x height` samples is copied into the top-left corner and
/// the remainder is zero, so the wavelet pyramid halves down to exactly one
/// element.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneBuffer {
    size: usize,
    data: Vec<f64>,
}

impl PlaneBuffer {
    /// Create a zeroed buffer
    pub fn new(size: usize) -> ImagoResult<Self> {
        if !size.is_power_of_two() {
            return Err(ImagoError::InvalidParameter(format!(
                "plane buffer size {size} is not a power of two"
            )));
        }
        Ok(Self {
            size,
            data: vec![0.0; size * size],
        })
    }

    /// Pad a row-major plane into the smallest square buffer that holds it
    pub fn from_plane(samples: &[f64], dimensions: Dimensions) -> ImagoResult<Self> {
        if dimensions.is_empty() {
            return Err(ImagoError::InvalidDimensions {
                width: dimensions.width,
                height: dimensions.height,
            });
        }
        if samples.len() != dimensions.pixel_count() {
            return Err(ImagoError::PlaneSizeMismatch {
                expected: dimensions.pixel_count(),
                actual: samples.len(),
            });
        }

        let width = dimensions.width as usize;
        let size = next_pow2(width).max(next_pow2(dimensions.height as usize));
        let mut buffer = Self::new(size)?;

        for (row, source) in buffer.data.chunks_exact_mut(size).zip(samples.chunks_exact(width)) {
            row[..width].copy_from_slice(source);
        }

        Ok(buffer)
    }

    /// Copy the top-left `width x height` region out, row-major
    pub fn crop(&self, dimensions: Dimensions) -> Vec<f64> {
        let width = dimensions.width as usize;
        let height = dimensions.height as usize;
        assert!(
            width <= self.size && height <= self.size,
            "crop {width}x{height} exceeds buffer size {}",
            self.size
        );

        self.data
            .chunks_exact(self.size)
            .take(height)
            .flat_map(|row| &row[..width])
            .copied()
            .collect()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[y * self.size + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        self.data[y * self.size + x] = value;
    }

    /// Sum of squared samples
    pub fn energy(&self) -> f64 {
        self.data.iter().map(|v| v * v).sum()
    }

    /// Number of samples that are exactly zero
    pub fn count_zeros(&self) -> usize {
        self.data.iter().filter(|v| **v == 0.0).count()
    }
}
