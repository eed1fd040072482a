//! Core types and utilities for imago
//!
//! This crate provides the fundamental data structures shared by every other
//! imago crate: the planar [`Image`], pixel and channel types, sample
//! conversions and the error type.

pub mod consts;
pub mod error;
pub mod image;
pub mod types;

pub use error::{ImagoError, ImagoResult};
pub use image::*;
pub use types::*;

/// Check that a compression ratio lies in `[0, 1]`.
///
/// NaN is rejected along with out-of-range values.
pub fn validate_ratio(ratio: f64) -> ImagoResult<f64> {
    if (0.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(ImagoError::InvalidRatio(ratio))
    }
}
