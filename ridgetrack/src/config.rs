//! Configuration for track extraction.
//!
//! [`TrackConfig`] is a flat struct grouped by comments into the stages that
//! consume each parameter. It can be loaded from YAML or JSON; missing fields
//! fall back to their defaults.

use std::path::Path;

use common::SerdeFormat;
use common::file_format;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result, TrackError};
use crate::kernel::search_reach;

/// Default half-width of the search neighborhood.
pub const DEFAULT_DELTA_LIMIT: usize = 4;

/// Largest accepted `delta_limit`. The padded activity image grows by
/// `2 * (delta_limit + 1)` bins on the search axis.
pub const MAX_DELTA_LIMIT: usize = 1 << 16;

/// Default percentile of positive energy below which entries are zeroed.
pub const DEFAULT_LOWER_PERCENTILE: f64 = 95.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    // ------------------------------------------------------------------------
    // Thresholding
    // ------------------------------------------------------------------------
    /// Entries strictly below this percentile of the positive entries are zeroed.
    /// Range: [0, 100].
    pub lower_percentile: f64,

    // ------------------------------------------------------------------------
    // Linking
    // ------------------------------------------------------------------------
    /// The search kernel spans offsets `-(delta_limit + 1)..=(delta_limit + 1)`
    /// along the search axis. Range: [1, MAX_DELTA_LIMIT].
    pub delta_limit: usize,
    /// Tracks are kept only when they have strictly more points than this.
    pub min_length: usize,

    // ------------------------------------------------------------------------
    // Interface
    // ------------------------------------------------------------------------
    /// Sampling frequency of the analyzed signal in Hz. Carried for callers
    /// that scale track coordinates; extraction never reads it.
    pub sample_rate: Option<f64>,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            lower_percentile: DEFAULT_LOWER_PERCENTILE,
            delta_limit: DEFAULT_DELTA_LIMIT,
            min_length: 0,
            sample_rate: None,
        }
    }
}

impl TrackConfig {
    pub fn validate(&self) -> Result<()> {
        search_reach(self.delta_limit)?;
        if !self.lower_percentile.is_finite() || !(0.0..=100.0).contains(&self.lower_percentile)
        {
            return Err(TrackError::InvalidParameter {
                name: "lower_percentile",
                reason: format!("must be in [0, 100], got {}", self.lower_percentile),
            });
        }
        if let Some(rate) = self.sample_rate {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(TrackError::InvalidParameter {
                    name: "sample_rate",
                    reason: format!("must be finite and positive, got {}", rate),
                });
            }
        }
        Ok(())
    }

    /// Load a config from a `.yaml`/`.yml` or `.json` file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = format_for(path)?;
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            file_format::deserialize(&text, format).map_err(|source| ConfigError::Format {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;

        tracing::debug!("Loaded track config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Write the config to a `.yaml`/`.yml` or `.json` file.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = format_for(path)?;
        let text = file_format::serialize(self, format).map_err(|source| ConfigError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, text).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

fn format_for(path: &Path) -> Result<SerdeFormat> {
    SerdeFormat::from_path(path).map_err(|source| {
        ConfigError::Format {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}
