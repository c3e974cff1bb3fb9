//! JSON output types for machine-readable CLI output.
//!
//! This module provides structured output types for the `--json` flag on
//! `validate` and `generate`, so scripts can consume results without
//! scraping colored text.

use serde::{Deserialize, Serialize};
use wavegen_spec::{BackendError, WaveParams};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Format: CLI_XXX for CLI-level errors, or passes through validation error codes.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// Invalid parameters (post-parse validation)
    pub const INVALID_PARAMS: &str = "CLI_003";
    /// Generation error (wraps backend errors)
    pub const GENERATION_ERROR: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the JSON path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the JSON path for this warning.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Envelope shared by every `--json` command output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Warnings (validation warnings pass through with their codes)
    pub warnings: Vec<JsonWarning>,
    /// Command result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> CommandOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>, warnings: Vec<JsonWarning>) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
        }
    }
}

/// JSON output for the `validate` command.
pub type ValidateOutput = CommandOutput<ValidateResult>;

/// JSON output for the `generate` command.
pub type GenerateOutput = CommandOutput<GenerateResult>;

/// Result details for a successful validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResult {
    /// Effective parameters after overrides
    pub params: WaveParams,
    /// Canonical hash of the effective parameters
    pub params_hash: String,
    /// BLAKE3 hash of the parameter file (if one was read)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
    /// Number of interleaved samples that would be generated
    pub sample_count: usize,
    /// Size of the WAV file that would be written, in bytes
    pub file_size: u64,
}

/// Result details for a successful generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResult {
    /// Effective parameters after overrides
    pub params: WaveParams,
    /// Canonical hash of the effective parameters
    pub params_hash: String,
    /// BLAKE3 hash of the parameter file (if one was read)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
    /// Output file path
    pub output: String,
    /// Output file size in bytes
    pub file_size: usize,
    /// BLAKE3 hash of the PCM data chunk
    pub pcm_hash: String,
    /// Frames written (samples per channel)
    pub num_frames: usize,
    /// Normalization reference the raw samples were scaled against
    pub peak: f64,
    /// Wall-clock duration of the command
    pub duration_ms: u64,
}

/// Converts an input loading error to a JSON error.
pub fn input_error_to_json(err: &crate::input::InputError, file: Option<&str>) -> JsonError {
    use crate::input::InputError;

    let (code, message) = match err {
        InputError::FileRead { path, source } => (
            error_codes::FILE_READ,
            format!("Failed to read file '{}': {}", path.display(), source),
        ),
        InputError::JsonParse { message } => (
            error_codes::JSON_PARSE,
            format!("JSON parse error: {}", message),
        ),
    };

    let mut error = JsonError::new(code, message);
    if let Some(f) = file {
        error = error.with_file(f);
    }
    error
}

/// Converts a validation error to a JSON error, keeping its E-code.
pub fn validation_error_to_json(err: &wavegen_spec::ValidationError) -> JsonError {
    let mut error = JsonError::new(err.code.to_string(), &err.message);
    if let Some(ref path) = err.path {
        error = error.with_path(path);
    }
    error
}

/// Converts a validation warning to a JSON warning.
pub fn validation_warning_to_json(warn: &wavegen_spec::ValidationWarning) -> JsonWarning {
    let mut warning = JsonWarning::new(warn.code.to_string(), &warn.message);
    if let Some(ref path) = warn.path {
        warning = warning.with_path(path);
    }
    warning
}

/// Wraps a backend error under [`error_codes::GENERATION_ERROR`].
pub fn backend_error_to_json<E: BackendError>(err: &E) -> JsonError {
    JsonError::new(
        error_codes::GENERATION_ERROR,
        format!("[{}] {}", err.code(), err.message()),
    )
}
