//! Waveform synthesis.
//!
//! - `oscillators` - Sine, square and triangle oscillators
//! - `normalize` - Peak normalization into the 16-bit range
//!
//! Synthesis renders the whole buffer first, replicating each raw value once
//! per channel, then applies a single normalization pass.

pub mod normalize;
pub mod oscillators;

use wavegen_spec::{validate_params, WaveParams, Waveform};

use crate::buffer::SampleBuffer;
use crate::error::{AudioError, AudioResult};

use self::normalize::{max_positive, normalize, TARGET_PEAK};
use self::oscillators::{SineOsc, SquareOsc, TriangleOsc};

/// What a normalization pass scales against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PeakReference {
    /// Largest positive raw sample seen while rendering.
    Tracked,
    /// Known peak of the shape, no tracking needed.
    Fixed(f64),
}

/// Common trait for waveform oscillators.
pub trait Oscillator {
    /// Raw, un-normalized value of sample `index`.
    fn sample_at(&self, index: usize) -> f64;

    /// Reference the rendered buffer is normalized against.
    fn peak_reference(&self) -> PeakReference;
}

/// A normalized buffer together with the reference it was scaled against.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Normalized interleaved samples.
    pub buffer: SampleBuffer,
    /// Raw value that was mapped onto [`TARGET_PEAK`].
    pub reference_peak: f64,
}

/// Synthesizes a normalized sample buffer.
///
/// # Arguments
/// * `params` - Waveform parameters
///
/// # Returns
/// `sample_rate * duration_seconds * channels` samples, normalized so the
/// positive peak sits at [`TARGET_PEAK`].
///
/// # Errors
/// [`AudioError::InvalidParameters`] if the parameters fail validation or the
/// rendered waveform has no positive excursion to normalize against.
pub fn synthesize(params: &WaveParams) -> AudioResult<SampleBuffer> {
    render(params).map(|rendered| rendered.buffer)
}

/// Like [`synthesize`], also returning the normalization reference.
pub fn render(params: &WaveParams) -> AudioResult<Rendered> {
    validate_params(params)
        .into_result()
        .map_err(|errors| AudioError::from_validation(&errors))?;

    let frames = params
        .frame_count()
        .ok_or_else(|| AudioError::invalid_param("duration_seconds", "frame count overflows"))?;
    let sample_rate = f64::from(params.sample_rate);

    match params.waveform {
        Waveform::Sine => render_oscillator(
            &SineOsc::new(params.amplitude, params.frequency, sample_rate),
            frames,
            params.channels,
        ),
        Waveform::Square => render_oscillator(
            &SquareOsc::new(params.frequency, sample_rate),
            frames,
            params.channels,
        ),
        Waveform::Triangle => render_oscillator(
            &TriangleOsc::new(params.amplitude, params.frequency, sample_rate),
            frames,
            params.channels,
        ),
    }
}

/// Renders `frames` time indices of an oscillator, `channels` copies each,
/// and normalizes the result.
pub fn render_oscillator<O: Oscillator + ?Sized>(
    osc: &O,
    frames: usize,
    channels: u16,
) -> AudioResult<Rendered> {
    let channels = usize::from(channels);
    let len = frames
        .checked_mul(channels)
        .ok_or_else(|| AudioError::invalid_param("channels", "sample count overflows"))?;

    let mut samples = Vec::with_capacity(len);
    for i in 0..frames {
        let value = osc.sample_at(i);
        samples.extend(std::iter::repeat(value).take(channels));
    }

    let reference_peak = match osc.peak_reference() {
        PeakReference::Tracked => max_positive(&samples),
        PeakReference::Fixed(peak) => peak,
    };
    normalize(&mut samples, reference_peak, TARGET_PEAK)?;

    Ok(Rendered {
        buffer: SampleBuffer::from(samples),
        reference_peak,
    })
}
