use std::path::PathBuf;

use common::FileFormatError;
use thiserror::Error;

/// Errors raised before or during track extraction.
///
/// Extraction itself is total over a validated matrix; every variant here
/// describes an input or parameter rejected up front.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("Ragged matrix: row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Non-finite energy at row {row}, column {col}")]
    NonFiniteEnergy { row: usize, col: usize },

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Percentile of an empty set is undefined")]
    EmptyPercentileInput,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors from reading or writing a [`TrackConfig`](crate::TrackConfig) file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Format {
        path: PathBuf,
        source: FileFormatError,
    },
}

pub type Result<T> = std::result::Result<T, TrackError>;
