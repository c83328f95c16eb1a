//! Greedy single-track walk over a padded activity image.
//!
//! From the seed, each step tries the kernel offsets in order and moves to
//! the first active pixel. Every pixel is cleared as soon as it joins the
//! path, so a walk never revisits a pixel and ends after at most one step
//! per active pixel.

use common::BitBuffer2;

use crate::kernel::SearchKernel;

/// Activity image with a zero border wide enough for every kernel offset.
///
/// Coordinates are `(link, search)` in padded space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedImage {
    bits: BitBuffer2,
    link_margin: usize,
    search_margin: usize,
}

impl PaddedImage {
    /// Copy `image` (width = search axis, height = link axis) into the
    /// center of a zero border sized for `kernel`.
    pub fn new(image: &BitBuffer2, kernel: &SearchKernel) -> Self {
        let link_margin = kernel.link_margin();
        let search_margin = kernel.search_margin();
        let mut bits = BitBuffer2::new_default(
            image.width() + 2 * search_margin,
            image.height() + 2 * link_margin,
        );
        for (x, y) in image.iter_ones() {
            bits.set_xy(x + search_margin, y + link_margin, true);
        }
        Self {
            bits,
            link_margin,
            search_margin,
        }
    }

    #[inline]
    pub fn link_len(&self) -> usize {
        self.bits.height()
    }

    #[inline]
    pub fn search_len(&self) -> usize {
        self.bits.width()
    }

    #[inline]
    pub fn link_margin(&self) -> usize {
        self.link_margin
    }

    #[inline]
    pub fn search_margin(&self) -> usize {
        self.search_margin
    }

    /// Whether `(link, search)` is inside the padded image and still active.
    #[inline]
    pub fn is_active(&self, (link, search): (usize, usize)) -> bool {
        link < self.link_len() && search < self.search_len() && self.bits.get_xy(search, link)
    }

    /// Clear a pixel so no later trace can use it.
    #[inline]
    fn consume(&mut self, (link, search): (usize, usize)) {
        self.bits.set_xy(search, link, false);
    }

    /// Number of pixels not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.bits.count_ones()
    }

    /// Map a padded coordinate back to 0-based unpadded space.
    #[inline]
    pub fn to_unpadded(&self, (link, search): (usize, usize)) -> (usize, usize) {
        debug_assert!(link >= self.link_margin && search >= self.search_margin);
        (link - self.link_margin, search - self.search_margin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TraceState {
    Walking,
    Stopped,
}

/// Walk one track from `seed`, consuming every pixel it visits including the seed.
///
/// Returns the path in padded coordinates, seed first. A path of length 1
/// means no neighbor was active.
pub fn trace_path(
    image: &mut PaddedImage,
    seed: (usize, usize),
    kernel: &SearchKernel,
) -> Vec<(usize, usize)> {
    debug_assert!(image.is_active(seed), "seed pixel must be active");

    image.consume(seed);
    let mut path = vec![seed];
    let mut current = seed;
    let mut state = TraceState::Walking;

    while state == TraceState::Walking {
        state = match next_step(image, current, kernel) {
            Some(next) => {
                image.consume(next);
                path.push(next);
                current = next;
                TraceState::Walking
            }
            None => TraceState::Stopped,
        };
    }

    path
}

/// First active neighbor of the current point, in kernel order.
#[inline]
fn next_step(
    image: &PaddedImage,
    (link, search): (usize, usize),
    kernel: &SearchKernel,
) -> Option<(usize, usize)> {
    kernel.iter().find_map(|offset| {
        let candidate = (
            link.checked_add_signed(offset.link)?,
            search.checked_add_signed(offset.search)?,
        );
        image.is_active(candidate).then_some(candidate)
    })
}
