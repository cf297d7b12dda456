//! Error types for questc
//!
//! Only run-fatal conditions live here. Per-entry failures are recorded as
//! `CompileOutcome` data and never surface as a `QuestError`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for questc operations
pub type QuestResult<T> = Result<T, QuestError>;

/// Main error type for questc operations
#[derive(Error, Debug)]
pub enum QuestError {
    /// The manifest file does not exist
    #[error("manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Run was stopped by the user (Ctrl+C)
    #[error("compilation interrupted by user")]
    Interrupted,
}

impl QuestError {
    /// Stable machine-readable code used in JSON error events
    pub fn code(&self) -> &'static str {
        match self {
            QuestError::ManifestNotFound { .. } => "manifest_not_found",
            QuestError::InvalidConfig { .. } => "invalid_config",
            QuestError::Io(_) => "io",
            QuestError::Interrupted => "interrupted",
        }
    }
}
