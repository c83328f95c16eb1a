//! Track extraction pipeline.
//!
//! # Algorithm Overview
//!
//! 1. **Thresholding**: Zero every energy entry below the configured
//!    percentile of the positive entries.
//!
//! 2. **Local maxima**: Mark the maxima of each link-axis slice along the
//!    search axis, producing a binary activity image.
//!
//! 3. **Linking**: Scan the padded activity image in raster order and walk a
//!    greedy track from every unconsumed active pixel, trying the search
//!    kernel offsets nearest first.
//!
//! 4. **Filtering**: Keep tracks with strictly more than `min_length` points.


use crate::config::TrackConfig;
use crate::edge_link::link_edges;
use crate::error::Result;
use crate::kernel::SearchKernel;
use crate::local_maxima::detect_local_maxima;
use crate::matrix::EnergyMatrix;
use crate::threshold::threshold_energy;
use crate::track::{Track, TrackOverlay};

/// Counts collected while extracting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionDiagnostics {
    /// Energy threshold applied, `None` when the matrix had no positive entries.
    pub threshold: Option<f64>,
    /// Local maxima in the activity image.
    pub active_pixels: usize,
    /// Paths traced by the linker.
    pub candidates: usize,
    /// Paths discarded by the length filter.
    pub rejected_short: usize,
    /// Points across all retained tracks.
    pub retained_points: usize,
}

/// Output of an extraction.
#[derive(Debug, Clone)]
pub struct TrackExtraction {
    /// Retained tracks, 1-based `(link, search)` points, in seed raster order.
    pub individual_tracks: Vec<Track>,
    /// Overlay of all retained tracks, `width` = search bins, `height` = link bins.
    pub tf_tracks: TrackOverlay,
    pub diagnostics: ExtractionDiagnostics,
}

/// Track extractor with builder pattern.
///
/// # Example
///
/// ```rust,ignore
/// use ridgetrack::{EnergyMatrix, TrackExtractor};
///
/// let matrix = EnergyMatrix::from_rows(&tf)?;
/// let result = TrackExtractor::new()
///     .with_min_length(10)
///     .with_lower_percentile(90.0)
///     .extract(&matrix)?;
///
/// println!("Found {} tracks", result.individual_tracks.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TrackExtractor {
    config: TrackConfig,
}

impl TrackExtractor {
    /// Create an extractor with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: TrackConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrackConfig {
        &self.config
    }

    pub fn with_delta_limit(mut self, delta_limit: usize) -> Self {
        self.config.delta_limit = delta_limit;
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.config.min_length = min_length;
        self
    }

    pub fn with_lower_percentile(mut self, lower_percentile: f64) -> Self {
        self.config.lower_percentile = lower_percentile;
        self
    }

    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.config.sample_rate = Some(sample_rate);
        self
    }

    /// Run the full pipeline on `matrix`. The input is not modified.
    pub fn extract(&self, matrix: &EnergyMatrix) -> Result<TrackExtraction> {
        self.config.validate()?;

        let mut energy = matrix.clone();
        let threshold = threshold_energy(&mut energy, self.config.lower_percentile)?;

        let activity = detect_local_maxima(&energy);
        let active_pixels = activity.count_ones();

        let kernel = SearchKernel::new(self.config.delta_limit)?;
        let linked = link_edges(&activity, self.config.min_length, &kernel);

        let diagnostics = ExtractionDiagnostics {
            threshold,
            active_pixels,
            candidates: linked.candidates,
            rejected_short: linked.rejected_short,
            retained_points: linked.tracks.iter().map(Track::len).sum(),
        };

        tracing::info!(
            "Extracted {} tracks ({} points) from {}x{} matrix",
            linked.tracks.len(),
            diagnostics.retained_points,
            matrix.link_len(),
            matrix.search_len()
        );

        Ok(TrackExtraction {
            individual_tracks: linked.tracks,
            tf_tracks: linked.overlay,
            diagnostics,
        })
    }
}

/// Extract tracks from link-major rows (`tf[t][f]`) with `config`.
pub fn extract_tracks(tf: &[Vec<f64>], config: &TrackConfig) -> Result<TrackExtraction> {
    let matrix = EnergyMatrix::from_rows(tf)?;
    TrackExtractor::from_config(config.clone()).extract(&matrix)
}
