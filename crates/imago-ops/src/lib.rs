//! Simple image operations for imago
//!
//! This crate implements the per-pixel and neighbourhood operations:
//! - Horizontal and vertical flips
//! - Brightness, channel isolation and grayscale conversion
//! - Fixed 3x3 kernel convolution (blur, sharpen, edge detection)

pub mod color;
pub mod convolve;
pub mod flip;

pub use color::*;
pub use convolve::*;
pub use flip::*;
