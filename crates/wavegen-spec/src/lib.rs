//! wavegen Parameter Library
//!
//! This crate provides the parameter types, validation and hashing shared by
//! the wavegen synthesis backend and command-line interface.
//!
//! # Example
//!
//! ```
//! use wavegen_spec::{validate_params, WaveParams, Waveform};
//!
//! let params = WaveParams::builder(Waveform::Sine)
//!     .frequency(440.0)
//!     .sample_rate(8000)
//!     .channels(1)
//!     .duration_seconds(1)
//!     .build();
//!
//! let result = validate_params(&params);
//! assert!(result.is_ok());
//! assert_eq!(params.sample_count(), Some(8000));
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`params`]: Waveform parameter document and builder
//! - [`validation`]: Parameter validation
//! - [`hash`]: Canonical parameter hashing

pub mod error;
pub mod hash;
pub mod params;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use hash::canonical_params_hash;
pub use params::{ParseWaveformError, WaveParams, WaveParamsBuilder, Waveform};
pub use validation::validate_params;
