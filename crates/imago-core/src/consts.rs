//! Constants used throughout imago

/// Maximum supported image dimension.
///
/// Compression pads each channel to `size x size` with `size` the next power
/// of two, and the 2D transform holds a column scratch of the same size, so a
/// call peaks at roughly `8 * size^2` f64 values with the four channels in
/// flight.
pub const MAX_IMAGE_DIMENSION: u32 = 1 << 16;

/// Number of planes in an [`Image`](crate::Image)
pub const NUM_CHANNELS: usize = 4;

/// Coefficients with a magnitude below this value are considered negligible
/// and are left out of the thresholding statistic.
///
/// The value is tied to the `[0, 1]` sample range and is not rescaled for
/// other bit depths.
pub const COEFFICIENT_EPSILON: f64 = 0.001;

/// Largest 8-bit sample value
pub const SAMPLE_MAX_U8: f64 = 255.0;

/// Largest 16-bit sample value
pub const SAMPLE_MAX_U16: f64 = 65535.0;
