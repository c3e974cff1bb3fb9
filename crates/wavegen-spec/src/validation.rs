//! Parameter validation.
//!
//! Validation collects every problem in one pass so callers can report them
//! together instead of fixing one field at a time.

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::params::WaveParams;

/// Size of the RIFF header that precedes the data chunk payload in
/// `ChunkSize` (everything after the first 8 bytes, minus the data itself).
const RIFF_HEADER_OVERHEAD: u128 = 36;

/// Bytes per encoded 16-bit sample.
const BYTES_PER_SAMPLE: u128 = 2;

/// Validates waveform parameters.
///
/// # Arguments
/// * `params` - The parameters to validate
///
/// # Returns
/// A [`ValidationResult`] holding all errors and warnings found.
///
/// # Example
/// ```
/// use wavegen_spec::{validate_params, ErrorCode, WaveParams, Waveform};
///
/// let params = WaveParams::builder(Waveform::Sine).amplitude(0.0).build();
/// let result = validate_params(&params);
/// assert!(!result.is_ok());
/// assert_eq!(result.errors[0].code, ErrorCode::InvalidAmplitude);
/// ```
pub fn validate_params(params: &WaveParams) -> ValidationResult {
    let mut result = ValidationResult::default();

    if !is_positive_finite(params.amplitude) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidAmplitude,
            format!(
                "amplitude must be a positive finite number, got {}",
                params.amplitude
            ),
            "amplitude",
        ));
    }

    if !is_positive_finite(params.frequency) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidFrequency,
            format!(
                "frequency must be a positive finite number, got {}",
                params.frequency
            ),
            "frequency",
        ));
    }

    if params.sample_rate == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSampleRate,
            "sample_rate must be at least 1 Hz",
            "sample_rate",
        ));
    }

    if params.channels == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidChannelCount,
            "channels must be at least 1",
            "channels",
        ));
    }

    if params.duration_seconds == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidDuration,
            "duration_seconds must be at least 1",
            "duration_seconds",
        ));
    }

    validate_size(params, &mut result);
    validate_format(params, &mut result);

    if is_positive_finite(params.frequency)
        && params.sample_rate > 0
        && params.frequency >= params.nyquist()
    {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::AboveNyquist,
            format!(
                "frequency {} Hz is at or above the Nyquist limit of {} Hz; output will alias",
                params.frequency,
                params.nyquist()
            ),
            "frequency",
        ));
    }

    if params.channels > 2 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::ReplicatedChannels,
            format!(
                "{} channels requested; every channel carries an identical copy",
                params.channels
            ),
            "channels",
        ));
    }

    result
}

/// Checks that the buffer is addressable and that its encoded size fits the
/// 32-bit RIFF size fields.
fn validate_size(params: &WaveParams, result: &mut ValidationResult) {
    if params.sample_count().is_none() {
        result.add_error(ValidationError::with_path(
            ErrorCode::SampleCountOverflow,
            format!(
                "sample_rate * duration_seconds * channels ({} * {} * {}) overflows the addressable sample count",
                params.sample_rate, params.duration_seconds, params.channels
            ),
            "duration_seconds",
        ));
        return;
    }

    let samples = u128::from(params.sample_rate)
        * u128::from(params.duration_seconds)
        * u128::from(params.channels);
    let chunk_size = RIFF_HEADER_OVERHEAD + samples * BYTES_PER_SAMPLE;
    if chunk_size > u128::from(u32::MAX) {
        result.add_error(ValidationError::with_path(
            ErrorCode::DataTooLarge,
            format!(
                "{} samples need a {} byte RIFF chunk, exceeding the 32-bit limit",
                samples, chunk_size
            ),
            "duration_seconds",
        ));
    }
}

/// Checks that `BlockAlign` fits in 16 bits and `ByteRate` in 32 bits.
fn validate_format(params: &WaveParams, result: &mut ValidationResult) {
    let block_align = u64::from(params.channels) * BYTES_PER_SAMPLE as u64;
    if block_align > u64::from(u16::MAX) {
        result.add_error(ValidationError::with_path(
            ErrorCode::FormatOutOfRange,
            format!(
                "{} channels give a block align of {} bytes, exceeding the 16-bit field",
                params.channels, block_align
            ),
            "channels",
        ));
        return;
    }

    let byte_rate = u64::from(params.sample_rate) * block_align;
    if byte_rate > u64::from(u32::MAX) {
        result.add_error(ValidationError::with_path(
            ErrorCode::FormatOutOfRange,
            format!("byte rate of {} bytes/s exceeds the 32-bit field", byte_rate),
            "sample_rate",
        ));
    }
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
