//! # imago
//!
//! Image manipulation built around a Haar wavelet lossy compressor.
//!
//! ## Quick Start
//!
//! ```no_run
//! use imago::{compress, flip_horizontal, io};
//!
//! let image = io::decode_file("input.png").unwrap();
//! let degraded = compress(&image, 0.9).unwrap();
//! io::encode_file(&flip_horizontal(&degraded), "output.png").unwrap();
//! ```
//!
//! ## Compression
//!
//! Each of the four channels is padded to a square power-of-two buffer,
//! transformed with a multi-level orthonormal Haar wavelet, and every
//! coefficient at or below the `ratio` quantile of the coefficient magnitudes
//! is zeroed before transforming back. A ratio of 0 reproduces the input up to
//! floating-point rounding.
//!
//! ## Sample range
//!
//! Samples are `f64` in `[0, 1]`. Decoding normalizes from 16-bit, encoding
//! writes 8-bit PNG and clamps.

// Re-export core types
pub use imago_core::{
    clamp_sample, consts, validate_ratio, Channel, Dimensions, Image, ImagoError, ImagoResult,
    Pixel, Sample,
};

// Re-export compression
pub use imago_compress::{
    compress, ChannelOutcome, ChannelReport, CompressOptions, CompressionReport, Compressor,
};

// Re-export simple operations
pub use imago_ops::{
    blue, blur, brighten, convolve, detect_edges, flip_horizontal, flip_vertical, grayscale,
    green, isolate, red, sharpen, GrayscaleMode, Kernel,
};

/// Lower-level transform building blocks
pub mod transform {
    pub use imago_transform::*;
}

/// Raster decoding and encoding
pub mod io {
    pub use imago_io::*;
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
