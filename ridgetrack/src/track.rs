//! Extracted tracks and their overlay image.

use common::BitBuffer2;
use serde::{Deserialize, Serialize};

/// A point on a track, 1-based along both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrackPoint {
    /// Link-axis index (time bin), in `1..=T`.
    pub link: usize,
    /// Search-axis index (frequency bin), in `1..=F`.
    pub search: usize,
}

impl TrackPoint {
    #[inline]
    pub fn new(link: usize, search: usize) -> Self {
        Self { link, search }
    }
}

impl From<(usize, usize)> for TrackPoint {
    #[inline]
    fn from((link, search): (usize, usize)) -> Self {
        Self { link, search }
    }
}

/// Ordered points of one ridge. Link indices increase by exactly one per point.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Track {
    points: Vec<TrackPoint>,
}

impl Track {
    pub fn new(points: Vec<TrackPoint>) -> Self {
        debug_assert!(
            points.windows(2).all(|w| w[1].link == w[0].link + 1),
            "track points must advance one link bin per step"
        );
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[TrackPoint] {
        &self.points
    }

    #[inline]
    pub fn first(&self) -> Option<&TrackPoint> {
        self.points.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&TrackPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrackPoint> {
        self.points.iter()
    }

    /// First and last link index covered.
    pub fn span(&self) -> Option<(usize, usize)> {
        Some((self.first()?.link, self.last()?.link))
    }
}

impl<'a> IntoIterator for &'a Track {
    type Item = &'a TrackPoint;
    type IntoIter = std::slice::Iter<'a, TrackPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Binary image with a bit set at every point of every retained track.
///
/// `width` is the search-axis length and `height` the link-axis length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackOverlay {
    bits: BitBuffer2,
}

impl TrackOverlay {
    /// Rasterize `tracks` into a `width x height` overlay. Every point must
    /// lie in `[1, height] x [1, width]`.
    pub(crate) fn from_tracks(width: usize, height: usize, tracks: &[Track]) -> Self {
        let mut bits = BitBuffer2::new_default(width, height);
        for point in tracks.iter().flat_map(Track::iter) {
            debug_assert!(point.link >= 1 && point.link <= height);
            debug_assert!(point.search >= 1 && point.search <= width);
            bits.set_xy(point.search - 1, point.link - 1, true);
        }
        Self { bits }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.bits.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.bits.height()
    }

    /// Whether the 1-based `point` belongs to some track.
    pub fn contains(&self, point: TrackPoint) -> bool {
        point.link >= 1
            && point.search >= 1
            && point.link <= self.height()
            && point.search <= self.width()
            && self.bits.get_xy(point.search - 1, point.link - 1)
    }

    /// Number of set pixels.
    #[inline]
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Set pixels as 1-based points, in link-major order.
    pub fn points(&self) -> impl Iterator<Item = TrackPoint> + '_ {
        self.bits
            .iter_ones()
            .map(|(x, y)| TrackPoint::new(y + 1, x + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(points: &[(usize, usize)]) -> Track {
        Track::new(points.iter().copied().map(TrackPoint::from).collect())
    }

    #[test]
    fn test_track_accessors() {
        let t = track(&[(3, 7), (4, 6), (5, 6)]);
        assert_eq!(t.len(), 3);
        assert_eq!(t.first(), Some(&TrackPoint::new(3, 7)));
        assert_eq!(t.last(), Some(&TrackPoint::new(5, 6)));
        assert_eq!(t.span(), Some((3, 5)));
        assert_eq!(Track::default().span(), None);
    }

    #[test]
    fn test_overlay_marks_all_points() {
        let tracks = [track(&[(1, 1), (2, 2)]), track(&[(2, 4), (3, 4), (4, 5)])];
        let overlay = TrackOverlay::from_tracks(5, 4, &tracks);

        assert_eq!(overlay.width(), 5);
        assert_eq!(overlay.height(), 4);
        assert_eq!(overlay.count(), 5);
        assert!(overlay.contains(TrackPoint::new(3, 4)));
        assert!(!overlay.contains(TrackPoint::new(3, 3)));
        assert!(!overlay.contains(TrackPoint::new(0, 1)));
        assert!(!overlay.contains(TrackPoint::new(9, 1)));

        let points: Vec<TrackPoint> = overlay.points().collect();
        assert_eq!(
            points,
            vec![
                TrackPoint::new(1, 1),
                TrackPoint::new(2, 2),
                TrackPoint::new(2, 4),
                TrackPoint::new(3, 4),
                TrackPoint::new(4, 5),
            ]
        );
    }

    #[test]
    fn test_track_serializes_as_point_list() {
        let t = track(&[(1, 2), (2, 2)]);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(
            json,
            r#"{"points":[{"link":1,"search":2},{"link":2,"search":2}]}"#
        );
    }
}
