//! Error types for the audio backend.

use thiserror::Error;
use wavegen_spec::{BackendError, ValidationError};

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur during synthesis or encoding.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Parameters rejected before synthesis or encoding started, or a
    /// normalization reference of zero.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameters {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// The output sink could not be opened or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameters {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Folds a non-empty list of validation errors into one error.
    ///
    /// The first error's path names the parameter; every message is kept.
    pub fn from_validation(errors: &[ValidationError]) -> Self {
        let name = errors
            .first()
            .and_then(|e| e.path.clone())
            .unwrap_or_else(|| "params".to_string());
        let message = errors
            .iter()
            .map(|e| format!("[{}] {}", e.code, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        Self::InvalidParameters { name, message }
    }
}

impl BackendError for AudioError {
    fn code(&self) -> &'static str {
        match self {
            AudioError::InvalidParameters { .. } => "AUDIO_001",
            AudioError::Io(_) => "AUDIO_002",
        }
    }

    fn category(&self) -> &'static str {
        "audio"
    }
}
