//! Quantile thresholding of wavelet coefficients
//!
//! The cutoff is the nearest-rank quantile of the coefficient magnitudes that
//! reach an epsilon; every coefficient at or below the cutoff is zeroed.

use rayon::prelude::*;

use imago_core::{validate_ratio, ImagoError, ImagoResult};

use crate::plane::PlaneBuffer;

/// Outcome of one thresholding pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    /// Magnitude at or below which coefficients were zeroed
    pub cutoff: f64,
    /// Number of coefficients that entered the statistic
    pub eligible: usize,
    /// Number of coefficients equal to zero after the pass
    pub zeroed: usize,
}

/// Check that an epsilon is finite and non-negative
pub fn validate_epsilon(epsilon: f64) -> ImagoResult<f64> {
    if epsilon.is_finite() && epsilon >= 0.0 {
        Ok(epsilon)
    } else {
        Err(ImagoError::InvalidParameter(format!(
            "epsilon must be finite and non-negative, got {epsilon}"
        )))
    }
}

/// Compute the magnitude cutoff for `ratio`.
///
/// Magnitudes below `epsilon` are excluded. Returns the cutoff and the number
/// of eligible coefficients, or [`ImagoError::EmptyCoefficientSet`] when none
/// qualify.
pub fn quantile_cutoff(coefficients: &[f64], ratio: f64, epsilon: f64) -> ImagoResult<(f64, usize)> {
    let mut magnitudes: Vec<f64> = coefficients
        .par_iter()
        .map(|v| v.abs())
        .filter(|m| *m >= epsilon)
        .collect();

    if magnitudes.is_empty() {
        return Err(ImagoError::EmptyCoefficientSet);
    }

    magnitudes.par_sort_unstable_by(f64::total_cmp);

    let last = magnitudes.len() - 1;
    let rank = ((ratio * last as f64).floor() as usize).min(last);
    Ok((magnitudes[rank], magnitudes.len()))
}

/// Zero every coefficient whose magnitude is at or below the `ratio` quantile.
///
/// A ratio of 0 leaves the buffer untouched and returns `Ok(None)`. When no
/// coefficient reaches `epsilon` the buffer is also left untouched and
/// [`ImagoError::EmptyCoefficientSet`] is returned.
pub fn threshold(plane: &mut PlaneBuffer, ratio: f64, epsilon: f64) -> ImagoResult<Option<Threshold>> {
    let ratio = validate_ratio(ratio)?;
    let epsilon = validate_epsilon(epsilon)?;
    if ratio == 0.0 {
        return Ok(None);
    }

    let (cutoff, eligible) = quantile_cutoff(plane.as_slice(), ratio, epsilon)?;

    plane.as_mut_slice().par_iter_mut().for_each(|v| {
        if v.abs() <= cutoff {
            *v = 0.0;
        }
    });
    let zeroed = plane.as_slice().par_iter().filter(|v| **v == 0.0).count();

    Ok(Some(Threshold {
        cutoff,
        eligible,
        zeroed,
    }))
}
