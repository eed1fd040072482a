//! Fixed 3x3 kernel convolution
//!
//! Borders are handled by clamping coordinates to the nearest edge pixel.
//! Results are clamped to `[0, 1]` and alpha is copied through.

use rayon::prelude::*;

use imago_core::{clamp_sample, Channel, Image, ImagoResult};

/// The supported convolution kernels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    BoxBlur,
    Sharpen,
    EdgeDetect,
}

impl Kernel {
    pub fn weights(&self) -> [[f64; 3]; 3] {
        match self {
            Kernel::BoxBlur => [[1.0 / 9.0; 3]; 3],
            Kernel::Sharpen => [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]],
            Kernel::EdgeDetect => [[-1.0, -1.0, -1.0], [-1.0, 8.0, -1.0], [-1.0, -1.0, -1.0]],
        }
    }
}

/// Convolve one row-major plane
pub fn convolve_plane(plane: &[f64], width: usize, height: usize, kernel: Kernel) -> Vec<f64> {
    assert_eq!(plane.len(), width * height);

    let weights = kernel.weights();
    let mut output = vec![0.0; plane.len()];

    output.par_chunks_mut(width).enumerate().for_each(|(y, row)| {
        for (x, value) in row.iter_mut().enumerate() {
            let mut sum = 0.0;
            for (ky, kernel_row) in weights.iter().enumerate() {
                let sy = (y + ky).saturating_sub(1).min(height - 1);
                for (kx, weight) in kernel_row.iter().enumerate() {
                    let sx = (x + kx).saturating_sub(1).min(width - 1);
                    sum += weight * plane[sy * width + sx];
                }
            }
            *value = clamp_sample(sum);
        }
    });

    output
}

/// Convolve the color channels of an image
pub fn convolve(image: &Image, kernel: Kernel) -> ImagoResult<Image> {
    let width = image.width() as usize;
    let height = image.height() as usize;

    let planes = Channel::ALL.map(|channel| {
        let plane = image.plane(channel);
        if channel.is_alpha() {
            plane.to_vec()
        } else {
            convolve_plane(plane, width, height, kernel)
        }
    });

    Image::from_planes(image.dimensions(), planes)
}

pub fn blur(image: &Image) -> ImagoResult<Image> {
    convolve(image, Kernel::BoxBlur)
}

pub fn sharpen(image: &Image) -> ImagoResult<Image> {
    convolve(image, Kernel::Sharpen)
}

pub fn detect_edges(image: &Image) -> ImagoResult<Image> {
    convolve(image, Kernel::EdgeDetect)
}
