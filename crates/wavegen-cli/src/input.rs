//! Parameter loading for CLI commands.
//!
//! Parameters start from the defaults, are optionally replaced by a JSON
//! parameter document, and finally have individual fields overridden by
//! command-line flags.

use std::path::{Path, PathBuf};

use wavegen_spec::{WaveParams, Waveform};

/// Per-field overrides supplied on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParamOverrides {
    pub waveform: Option<Waveform>,
    pub amplitude: Option<f64>,
    pub frequency: Option<f64>,
    pub sample_rate: Option<u32>,
    pub channels: Option<u16>,
    pub duration_seconds: Option<u32>,
}

impl ParamOverrides {
    /// Returns true if no field is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Writes every set field into `params`.
    pub fn apply(&self, params: &mut WaveParams) {
        if let Some(waveform) = self.waveform {
            params.waveform = waveform;
        }
        if let Some(amplitude) = self.amplitude {
            params.amplitude = amplitude;
        }
        if let Some(frequency) = self.frequency {
            params.frequency = frequency;
        }
        if let Some(sample_rate) = self.sample_rate {
            params.sample_rate = sample_rate;
        }
        if let Some(channels) = self.channels {
            params.channels = channels;
        }
        if let Some(duration_seconds) = self.duration_seconds {
            params.duration_seconds = duration_seconds;
        }
    }
}

/// Result of loading parameters.
#[derive(Debug)]
pub struct LoadResult {
    /// Parameters with overrides applied.
    pub params: WaveParams,
    /// BLAKE3 hash of the parameter file content, if one was read.
    pub source_hash: Option<String>,
}

/// Errors that can occur while loading a parameter file.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parsing failed.
    JsonParse { message: String },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::JsonParse { message } => {
                write!(f, "JSON parse error: {}", message)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Loads parameters from an optional JSON file and applies overrides.
///
/// # Arguments
/// * `path` - Parameter document, or `None` to start from the defaults
/// * `overrides` - Command-line field overrides
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use wavegen_cli::input::{load_params, ParamOverrides};
///
/// let result = load_params(Some(Path::new("params.json")), &ParamOverrides::default()).unwrap();
/// println!("{} Hz", result.params.frequency);
/// ```
pub fn load_params(
    path: Option<&Path>,
    overrides: &ParamOverrides,
) -> Result<LoadResult, InputError> {
    let (mut params, source_hash) = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
                path: path.to_path_buf(),
                source: e,
            })?;
            let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();
            let params = WaveParams::from_json(&content).map_err(|e| InputError::JsonParse {
                message: e.to_string(),
            })?;
            (params, Some(source_hash))
        }
        None => (WaveParams::default(), None),
    };

    overrides.apply(&mut params);

    Ok(LoadResult {
        params,
        source_hash,
    })
}
