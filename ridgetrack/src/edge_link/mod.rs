//! Edge linking: stitch active pixels into tracks.
//!
//! The activity image is padded for the kernel, then scanned in raster order
//! (link axis outer, search axis inner). Every pixel still active when the
//! scan reaches it seeds a [`trace_path`] walk, which consumes the pixels it
//! uses. Traced paths longer than `min_length` are kept.
//!
//! Track identity depends on this order: a different raster order or kernel
//! order assigns pixels to different tracks.


use common::BitBuffer2;

use crate::kernel::SearchKernel;
use crate::path_trace::{PaddedImage, trace_path};
use crate::track::{Track, TrackOverlay, TrackPoint};

/// Tracks found by [`link_edges`] plus counts of what the scan traced.
#[derive(Debug, Clone)]
pub struct LinkedTracks {
    /// Retained tracks in seed raster order, 1-based coordinates.
    pub tracks: Vec<Track>,
    /// Every point of every retained track.
    pub overlay: TrackOverlay,
    /// Number of traced paths, retained or not.
    pub candidates: usize,
    /// Paths discarded for having `min_length` points or fewer.
    pub rejected_short: usize,
}

/// Link the active pixels of `image` (width = search axis, height = link axis) into tracks.
///
/// A path is kept only if its length is strictly greater than `min_length`.
pub fn link_edges(image: &BitBuffer2, min_length: usize, kernel: &SearchKernel) -> LinkedTracks {
    let mut padded = PaddedImage::new(image, kernel);
    let mut tracks = Vec::new();
    let mut candidates = 0;
    let mut rejected_short = 0;

    for link in 0..padded.link_len() {
        for search in 0..padded.search_len() {
            if !padded.is_active((link, search)) {
                continue;
            }

            let path = trace_path(&mut padded, (link, search), kernel);
            candidates += 1;
            tracing::trace!(
                "Traced {} points from seed ({}, {})",
                path.len(),
                link,
                search
            );

            if path.len() > min_length {
                tracks.push(to_track(&padded, &path));
            } else {
                rejected_short += 1;
            }
        }
    }
    debug_assert_eq!(padded.remaining(), 0, "every active pixel must be consumed");

    let overlay = TrackOverlay::from_tracks(image.width(), image.height(), &tracks);

    tracing::debug!(
        "Linked {} candidates: {} retained, {} shorter than or equal to {}",
        candidates,
        tracks.len(),
        rejected_short,
        min_length
    );

    LinkedTracks {
        tracks,
        overlay,
        candidates,
        rejected_short,
    }
}

/// Convert a padded path to a 1-based track.
fn to_track(padded: &PaddedImage, path: &[(usize, usize)]) -> Track {
    Track::new(
        path.iter()
            .map(|&p| {
                let (link, search) = padded.to_unpadded(p);
                TrackPoint::new(link + 1, search + 1)
            })
            .collect(),
    )
}
