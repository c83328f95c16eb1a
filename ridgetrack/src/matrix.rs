//! Energy matrix in link-major layout.
//!
//! Row `y` is one slice along the link axis (a time bin) and column `x`
//! indexes the search axis (a frequency bin). All downstream stages work in
//! this orientation.

use common::Buffer2;

use crate::error::{Result, TrackError};

#[derive(Debug, Clone, PartialEq)]
pub struct EnergyMatrix {
    values: Buffer2<f64>,
}

impl EnergyMatrix {
    /// Build from link-major rows: `rows[t][f]` is the energy of time bin `t`
    /// at frequency bin `f`.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        let mut values = Vec::with_capacity(width * rows.len());
        for (row, slice) in rows.iter().enumerate() {
            if slice.len() != width {
                return Err(TrackError::RaggedMatrix {
                    row,
                    expected: width,
                    found: slice.len(),
                });
            }
            values.extend_from_slice(slice);
        }
        Self::from_buffer(Buffer2::new(width, rows.len(), values))
    }

    /// Build from frequency-major rows (`rows[f][t]`), transposing into
    /// link-major layout.
    pub fn from_freq_major(rows: &[Vec<f64>]) -> Result<Self> {
        let freq_major = Self::from_rows(rows)?;
        Ok(Self {
            values: freq_major.values.transposed(),
        })
    }

    /// Wrap an existing link-major buffer (`width` = search bins, `height` = link bins).
    pub fn from_buffer(values: Buffer2<f64>) -> Result<Self> {
        if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
            return Err(TrackError::NonFiniteEnergy {
                row: idx / values.width().max(1),
                col: idx % values.width().max(1),
            });
        }
        Ok(Self { values })
    }

    /// Number of bins along the link axis (T).
    #[inline]
    pub fn link_len(&self) -> usize {
        self.values.height()
    }

    /// Number of bins along the search axis (F).
    #[inline]
    pub fn search_len(&self) -> usize {
        self.values.width()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Energy at `(link, search)`, 0-based.
    #[inline]
    pub fn get(&self, link: usize, search: usize) -> f64 {
        *self.values.get(search, link)
    }

    /// One slice along the search axis at link index `link`.
    #[inline]
    pub fn slice(&self, link: usize) -> &[f64] {
        self.values.row(link)
    }

    pub fn slices(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.rows()
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        self.values.values()
    }

    #[inline]
    pub(crate) fn values_mut(&mut self) -> &mut [f64] {
        self.values.values_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_layout() {
        let m = EnergyMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.link_len(), 2);
        assert_eq!(m.search_len(), 3);
        assert_eq!(m.get(1, 0), 4.0);
        assert_eq!(m.slice(0), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = EnergyMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0]]).unwrap_err();
        assert!(matches!(
            err,
            TrackError::RaggedMatrix {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_from_rows_rejects_non_finite() {
        let err = EnergyMatrix::from_rows(&[vec![1.0, 2.0], vec![f64::NAN, 0.0]]).unwrap_err();
        assert!(matches!(err, TrackError::NonFiniteEnergy { row: 1, col: 0 }));
    }

    #[test]
    fn test_from_freq_major_transposes() {
        // 2 frequency bins x 3 time bins
        let m = EnergyMatrix::from_freq_major(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.link_len(), 3);
        assert_eq!(m.search_len(), 2);
        assert_eq!(m.slice(2), &[3.0, 6.0]);
    }

    #[test]
    fn test_empty_input() {
        let m = EnergyMatrix::from_rows(&[]).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.link_len(), 0);
        assert_eq!(m.search_len(), 0);
    }
}
