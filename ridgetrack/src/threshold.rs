//! Percentile thresholding of the energy matrix.
//!
//! The threshold is the `p`-th percentile of the strictly positive entries.
//! Entries strictly below it are zeroed. A matrix without positive entries
//! has no threshold and is zeroed entirely.

use crate::error::Result;
use crate::matrix::EnergyMatrix;
use crate::percentile::percentile;

/// The `p`-th percentile of the strictly positive entries, or `None` when there are none.
pub fn positive_percentile(matrix: &EnergyMatrix, p: f64) -> Result<Option<f64>> {
    let positive: Vec<f64> = matrix.values().iter().copied().filter(|&v| v > 0.0).collect();
    if positive.is_empty() {
        return Ok(None);
    }
    percentile(&positive, p).map(Some)
}

/// Zero every entry strictly below `threshold`. Idempotent for a fixed threshold.
pub fn apply_threshold(matrix: &mut EnergyMatrix, threshold: f64) {
    for v in matrix.values_mut() {
        if *v < threshold {
            *v = 0.0;
        }
    }
}

/// Threshold `matrix` in place at the `p`-th positive percentile.
///
/// Returns the threshold that was applied, or `None` if the matrix had no
/// positive entries (in which case it is left all-zero).
pub fn threshold_energy(matrix: &mut EnergyMatrix, p: f64) -> Result<Option<f64>> {
    let threshold = positive_percentile(matrix, p)?;
    match threshold {
        Some(value) => apply_threshold(matrix, value),
        None => matrix.values_mut().fill(0.0),
    }
    tracing::debug!("Energy threshold at p={}: {:?}", p, threshold);
    Ok(threshold)
}
