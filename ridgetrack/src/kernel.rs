//! Search kernel: the ordered neighbor offsets tried when extending a track.

use crate::config::MAX_DELTA_LIMIT;
use crate::error::{Result, TrackError};

/// One candidate step. `link` is always `+1`: a track advances exactly one
/// bin along the link axis per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KernelOffset {
    pub link: isize,
    pub search: isize,
}

/// Offsets ordered by ascending `|search|`; at equal magnitude the negative
/// offset comes first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchKernel {
    offsets: Vec<KernelOffset>,
}

impl SearchKernel {
    /// Build the kernel spanning `-(delta_limit + 1)..=(delta_limit + 1)` on the search axis.
    ///
    /// The result has `2 * delta_limit + 3` entries. Fails when `delta_limit`
    /// is outside `1..=MAX_DELTA_LIMIT`.
    pub fn new(delta_limit: usize) -> Result<Self> {
        let reach = search_reach(delta_limit)?;
        let mut search: Vec<isize> = (-reach..=reach).collect();
        // Stable: ties keep enumeration order, so -d precedes +d.
        search.sort_by_key(|d| d.abs());

        Ok(Self {
            offsets: search
                .into_iter()
                .map(|search| KernelOffset { link: 1, search })
                .collect(),
        })
    }

    #[inline]
    pub fn offsets(&self) -> &[KernelOffset] {
        &self.offsets
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Padding needed on the search axis: `max |search|`.
    pub fn search_margin(&self) -> usize {
        self.offsets
            .iter()
            .map(|o| o.search.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Padding needed on the link axis: `max |link|`.
    pub fn link_margin(&self) -> usize {
        self.offsets
            .iter()
            .map(|o| o.link.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KernelOffset> {
        self.offsets.iter()
    }
}

/// Largest `|search|` offset for `delta_limit`, i.e. `delta_limit + 1`.
pub(crate) fn search_reach(delta_limit: usize) -> Result<isize> {
    if delta_limit == 0 || delta_limit > MAX_DELTA_LIMIT {
        return Err(TrackError::InvalidParameter {
            name: "delta_limit",
            reason: format!("must be in 1..={}, got {}", MAX_DELTA_LIMIT, delta_limit),
        });
    }
    isize::try_from(delta_limit + 1).map_err(|_| TrackError::InvalidParameter {
        name: "delta_limit",
        reason: format!("{} does not fit a signed offset", delta_limit),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_offsets(kernel: &SearchKernel) -> Vec<isize> {
        kernel.iter().map(|o| o.search).collect()
    }

    #[test]
    fn test_default_kernel_order() {
        let kernel = SearchKernel::new(4).unwrap();
        assert_eq!(
            search_offsets(&kernel),
            vec![0, -1, 1, -2, 2, -3, 3, -4, 4, -5, 5]
        );
        assert!(kernel.iter().all(|o| o.link == 1));
    }

    #[test]
    fn test_kernel_length() {
        for delta_limit in 1..10 {
            let kernel = SearchKernel::new(delta_limit).unwrap();
            assert_eq!(kernel.len(), 2 * delta_limit + 3);
        }
    }

    #[test]
    fn test_smallest_kernel() {
        let kernel = SearchKernel::new(1).unwrap();
        assert_eq!(search_offsets(&kernel), vec![0, -1, 1, -2, 2]);
    }

    #[test]
    fn test_margins() {
        let kernel = SearchKernel::new(4).unwrap();
        assert_eq!(kernel.search_margin(), 5);
        assert_eq!(kernel.link_margin(), 1);
        assert!(!kernel.is_empty());
    }

    #[test]
    fn test_rejects_out_of_range_delta_limit() {
        for bad in [0, MAX_DELTA_LIMIT + 1, isize::MAX as usize, usize::MAX] {
            assert!(
                matches!(
                    SearchKernel::new(bad),
                    Err(TrackError::InvalidParameter {
                        name: "delta_limit",
                        ..
                    })
                ),
                "delta_limit {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_largest_delta_limit_builds_full_kernel() {
        let kernel = SearchKernel::new(MAX_DELTA_LIMIT).unwrap();
        assert_eq!(kernel.len(), 2 * MAX_DELTA_LIMIT + 3);
        assert_eq!(kernel.search_margin(), MAX_DELTA_LIMIT + 1);
    }
}
