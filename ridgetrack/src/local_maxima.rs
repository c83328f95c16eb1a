//! Per-slice local maxima detection.
//!
//! Each link-axis slice is scanned along the search axis using its first
//! difference `u[k] = q[k + 1] - q[k]`. Index `k + 1` is a maximum when the
//! slice rises or stays flat into it (`u[k] >= 0`) and falls out of it
//! (`u[k + 1] < 0`). Only `k` in `0..len - 3` is scanned, so the first
//! sample and the last two samples of a slice are never flagged.

use common::BitBuffer2;

use crate::matrix::EnergyMatrix;

/// Flag the local maxima of one slice into `out` (same length, all `false` on entry).
pub fn mark_slice_maxima(slice: &[f64], out: &mut [bool]) {
    debug_assert_eq!(slice.len(), out.len());

    if slice.len() < 4 {
        return;
    }

    for k in 0..slice.len() - 3 {
        let rise = slice[k + 1] - slice[k];
        let fall = slice[k + 2] - slice[k + 1];
        if rise >= 0.0 && fall < 0.0 {
            out[k + 1] = true;
        }
    }
}

/// Binary activity image of `matrix`: one row per link slice, `true` at each local maximum.
pub fn detect_local_maxima(matrix: &EnergyMatrix) -> BitBuffer2 {
    let width = matrix.search_len();
    let height = matrix.link_len();
    let mut image = BitBuffer2::new_default(width, height);
    let mut row = vec![false; width];

    for (y, slice) in matrix.slices().enumerate() {
        row.fill(false);
        mark_slice_maxima(slice, &mut row);
        for (x, _) in row.iter().enumerate().filter(|&(_, &is_max)| is_max) {
            image.set_xy(x, y, true);
        }
    }

    tracing::debug!(
        "Local maxima: {} active pixels in {}x{} image",
        image.count_ones(),
        width,
        height
    );
    image
}
