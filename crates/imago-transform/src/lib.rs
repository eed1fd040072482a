//! Transform operations for imago
//!
//! This crate implements the padded working buffer, the orthonormal Haar
//! wavelet (one- and two-dimensional) and quantile thresholding of wavelet
//! coefficients.

pub mod haar;
pub mod plane;
pub mod pyramid;
pub mod threshold;

pub use haar::*;
pub use plane::*;
pub use pyramid::*;
pub use threshold::*;
