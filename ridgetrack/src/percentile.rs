//! Linear-interpolation percentile.

use crate::error::{Result, TrackError};

/// The `p`-th percentile (`p` in [0, 100]) of `values`.
///
/// Sorts a copy and interpolates linearly between the order statistics at
/// rank `p / 100 * (n - 1)`. Fails on an empty set.
pub fn percentile(values: &[f64], p: f64) -> Result<f64> {
    if values.is_empty() {
        return Err(TrackError::EmptyPercentileInput);
    }
    if !p.is_finite() || !(0.0..=100.0).contains(&p) {
        return Err(TrackError::InvalidParameter {
            name: "percentile",
            reason: format!("must be in [0, 100], got {}", p),
        });
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(percentile_sorted(&sorted, p))
}

/// Percentile of already-sorted, non-empty data.
#[inline]
pub(crate) fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = p / 100.0 * (n - 1) as f64;
    let low = rank.floor() as usize;
    let high = (low + 1).min(n - 1);
    let frac = rank - low as f64;

    sorted[low] + (sorted[high] - sorted[low]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_fails() {
        assert!(matches!(
            percentile(&[], 50.0),
            Err(TrackError::EmptyPercentileInput)
        ));
    }

    #[test]
    fn test_single_value() {
        assert_eq!(percentile(&[3.5], 0.0).unwrap(), 3.5);
        assert_eq!(percentile(&[3.5], 95.0).unwrap(), 3.5);
    }

    #[test]
    fn test_endpoints_are_min_and_max() {
        let values = [4.0, 1.0, 3.0, 2.0];
        assert_eq!(percentile(&values, 0.0).unwrap(), 1.0);
        assert_eq!(percentile(&values, 100.0).unwrap(), 4.0);
    }

    #[test]
    fn test_linear_interpolation() {
        // rank = 0.5 * 3 = 1.5 -> halfway between 2 and 3
        let values = [4.0, 1.0, 3.0, 2.0];
        assert!((percentile(&values, 50.0).unwrap() - 2.5).abs() < 1e-12);

        // rank = 0.95 * 4 = 3.8 -> 4 + 0.8 * (5 - 4)
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((percentile(&values, 95.0).unwrap() - 4.8).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_out_of_range_p() {
        assert!(percentile(&[1.0], 101.0).is_err());
        assert!(percentile(&[1.0], -1.0).is_err());
        assert!(percentile(&[1.0], f64::NAN).is_err());
    }

    #[test]
    fn test_does_not_reorder_input() {
        let values = [3.0, 1.0, 2.0];
        percentile(&values, 50.0).unwrap();
        assert_eq!(values, [3.0, 1.0, 2.0]);
    }
}
