//! Error types for imago operations

use thiserror::Error;

/// Result type for imago operations
pub type ImagoResult<T> = Result<T, ImagoError>;

/// Errors that can occur while building, transforming or coding images
#[derive(Error, Debug)]
pub enum ImagoError {
    #[error("Invalid compression ratio: {0} (expected a value in [0, 1])")]
    InvalidRatio(f64),

    #[error("No coefficient reaches the thresholding epsilon")]
    EmptyCoefficientSet,

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Plane size mismatch: expected {expected} samples, got {actual}")]
    PlaneSizeMismatch { expected: usize, actual: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Decoding error: {0}")]
    DecodingError(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
