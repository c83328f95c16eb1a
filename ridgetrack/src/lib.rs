//! Ridgetrack - ridge track extraction from time-frequency distributions.
//!
//! Extracts tracks, sequences of `(time, frequency)` bins that follow ridges
//! of high energy, from a dense energy matrix. The matrix is thresholded
//! at a percentile of its positive energy. Each time slice is reduced to its
//! local maxima, and adjacent maxima are greedily linked into tracks.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ridgetrack::{TrackConfig, extract_tracks};
//!
//! // tf[t][f]: energy of time bin t at frequency bin f
//! let config = TrackConfig {
//!     min_length: 8,
//!     ..Default::default()
//! };
//! let result = extract_tracks(&tf, &config)?;
//!
//! for track in &result.individual_tracks {
//!     println!("track over time bins {:?}", track.span());
//! }
//! ```

mod config;
pub mod edge_link;
mod error;
mod extractor;
pub mod kernel;
pub mod local_maxima;
mod matrix;
pub mod path_trace;
pub mod percentile;
pub mod threshold;
mod track;

pub use common::BitBuffer2;
pub use config::{DEFAULT_DELTA_LIMIT, DEFAULT_LOWER_PERCENTILE, MAX_DELTA_LIMIT, TrackConfig};
pub use error::{ConfigError, Result, TrackError};
pub use extractor::{ExtractionDiagnostics, TrackExtraction, TrackExtractor, extract_tracks};
pub use kernel::{KernelOffset, SearchKernel};
pub use matrix::EnergyMatrix;
pub use track::{Track, TrackOverlay, TrackPoint};
