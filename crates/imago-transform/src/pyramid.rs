//! Separable multi-level 2D Haar pyramid
//!
//! Each level works on a prefix of `length` elements of every row and every
//! column. Elements at or past `length` already hold detail coefficients of
//! shallower levels and are never touched again.
//!
//! Rows (and, separately, columns) of one pass are independent and run on the
//! rayon pool. A pass only returns once every unit has finished, which is the
//! barrier between the row pass, the column pass and the next level.

use log::trace;
use rayon::prelude::*;

use crate::haar::{haar_forward, haar_inverse};
use crate::plane::PlaneBuffer;

type Butterfly = fn(&mut [f64], usize, &mut [f64]);

/// Apply the forward transform to the first `length` elements of every row
fn row_pass(data: &mut [f64], size: usize, length: usize, butterfly: Butterfly) {
    data.par_chunks_mut(size)
        .for_each_init(|| vec![0.0; length], |scratch, row| butterfly(row, length, scratch));
}

/// Apply `butterfly` to the first `length` elements of every column.
///
/// Columns are gathered into `columns` (column-major, `length` elements per
/// column), transformed there and scattered back.
fn column_pass(
    data: &mut [f64],
    size: usize,
    length: usize,
    columns: &mut [f64],
    butterfly: Butterfly,
) {
    let columns = &mut columns[..size * length];

    let source: &[f64] = data;
    columns.par_chunks_mut(length).enumerate().for_each_init(
        || vec![0.0; length],
        |scratch, (x, column)| {
            for (y, value) in column.iter_mut().enumerate() {
                *value = source[y * size + x];
            }
            butterfly(column, length, scratch);
        },
    );

    let columns: &[f64] = columns;
    data[..size * length]
        .par_chunks_mut(size)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, value) in row.iter_mut().enumerate() {
                *value = columns[x * length + y];
            }
        });
}

/// Forward 2D Haar transform, in place.
///
/// The working size starts at the buffer size and halves down to 1. Each level
/// runs a row pass, then a column pass.
pub fn haar2d_forward(plane: &mut PlaneBuffer) {
    let size = plane.size();
    let mut columns = vec![0.0; size * size];

    let mut length = size;
    while length > 1 {
        row_pass(plane.as_mut_slice(), size, length, haar_forward);
        column_pass(plane.as_mut_slice(), size, length, &mut columns, haar_forward);
        trace!("forward Haar level {length}/{size} done");
        length /= 2;
    }
}

/// Inverse 2D Haar transform, in place.
///
/// The working size starts at 2 and doubles up to the buffer size. Each level
/// runs a column pass, then a row pass, mirroring [`haar2d_forward`].
pub fn haar2d_inverse(plane: &mut PlaneBuffer) {
    let size = plane.size();
    let mut columns = vec![0.0; size * size];

    let mut length = 2;
    while length <= size {
        column_pass(plane.as_mut_slice(), size, length, &mut columns, haar_inverse);
        row_pass(plane.as_mut_slice(), size, length, haar_inverse);
        trace!("inverse Haar level {length}/{size} done");
        length *= 2;
    }
}
