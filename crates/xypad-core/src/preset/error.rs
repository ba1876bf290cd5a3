//! Error types for preset persistence

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while saving or loading preset files
#[derive(Debug, Error)]
pub enum PresetError {
    /// Reading, writing or listing failed
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not valid JSON
    #[error("Preset '{path}' is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// State could not be encoded as JSON
    #[error("Failed to encode preset '{path}': {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but the top-level value is not an object
    #[error("Preset '{path}' does not contain a JSON object")]
    NotAnObject { path: PathBuf },

    /// A required key is absent
    #[error("Preset '{path}' is missing the '{field}' field")]
    MissingField { path: PathBuf, field: &'static str },

    /// A key is present but holds the wrong kind of value
    #[error("Preset '{path}' has a non-numeric '{field}' field")]
    InvalidField { path: PathBuf, field: &'static str },

    /// Preset index outside {0, 1, 2}
    #[error("Preset '{path}' has preset index {index}, expected 0-2")]
    InvalidPreset { path: PathBuf, index: i64 },

    /// File name rejected by the save dialog
    #[error("Invalid preset name '{0}'")]
    InvalidName(String),
}

/// Result type for preset operations
pub type PresetResult<T> = Result<T, PresetError>;
