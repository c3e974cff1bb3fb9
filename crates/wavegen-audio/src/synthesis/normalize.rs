//! Peak normalization into the 16-bit integer range.

use crate::error::{AudioError, AudioResult};

/// Peak value a normalized buffer is scaled to.
///
/// Sits a few steps below `i16::MAX` so truncation to 16 bits never wraps.
pub const TARGET_PEAK: f64 = 32760.0;

/// Scales every sample by `target_peak / reference_peak`.
///
/// Divides before multiplying so samples near `f64::MAX` stay finite. A
/// sample equal to the reference maps onto `target_peak` exactly.
///
/// # Arguments
/// * `samples` - Samples to scale in place
/// * `reference_peak` - Value that should map onto `target_peak`
/// * `target_peak` - Peak of the normalized output
///
/// # Errors
/// Returns [`AudioError::InvalidParameters`] when `reference_peak` is zero,
/// negative or not finite; `samples` is left untouched in that case.
pub fn normalize(samples: &mut [f64], reference_peak: f64, target_peak: f64) -> AudioResult<()> {
    if !(reference_peak.is_finite() && reference_peak > 0.0) {
        return Err(AudioError::invalid_param(
            "amplitude",
            format!(
                "normalization reference must be positive, got {}; the waveform has no positive excursion",
                reference_peak
            ),
        ));
    }

    for sample in samples.iter_mut() {
        *sample = *sample / reference_peak * target_peak;
    }

    Ok(())
}

/// Largest strictly positive sample, or `0.0` when there is none.
///
/// Negative samples never raise the result.
pub fn max_positive(samples: &[f64]) -> f64 {
    samples
        .iter()
        .copied()
        .fold(0.0_f64, |max, s| if s > max { s } else { max })
}
