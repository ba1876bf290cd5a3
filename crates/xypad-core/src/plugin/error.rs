//! Error types for host state restore

use thiserror::Error;

/// Errors that can occur when restoring host-saved plugin state
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    /// Blob shorter than the fixed layout
    #[error("State blob too short: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    /// Stored preset index outside {0, 1, 2}
    #[error("State blob has preset index {0}, expected 0-2")]
    InvalidPreset(i32),
}

/// Result type for state restore
pub type StateResult<T> = Result<T, StateError>;
