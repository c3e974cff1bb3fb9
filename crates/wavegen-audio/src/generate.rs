//! Main entry point for waveform generation.
//!
//! Synthesizes the buffer described by a [`WaveParams`] and encodes it as a
//! WAV file, either in memory or straight to disk.

use std::path::Path;

use wavegen_spec::{canonical_params_hash, WaveParams, Waveform};

use crate::error::{AudioError, AudioResult};
use crate::synthesis::render;
use crate::wav::{encode_to_file, WavFormat, WavResult};

/// Result of waveform generation.
#[derive(Debug)]
pub struct GenerateResult {
    /// Waveform that was rendered.
    pub waveform: Waveform,
    /// Canonical hash of the input parameters.
    pub params_hash: String,
    /// Normalization reference the raw samples were scaled against.
    pub peak: f64,
    /// WAV file data.
    pub wav: WavResult,
}

/// Generates a WAV file in memory.
///
/// # Arguments
/// * `params` - Waveform parameters
///
/// # Returns
/// Generated WAV bytes and metadata
pub fn generate(params: &WaveParams) -> AudioResult<GenerateResult> {
    let params_hash = params_hash(params)?;
    let rendered = render(params)?;
    let wav = WavResult::from_buffer(rendered.buffer, WavFormat::from_params(params))?;

    Ok(GenerateResult {
        waveform: params.waveform,
        params_hash,
        peak: rendered.reference_peak,
        wav,
    })
}

/// Generates a WAV file and writes it to `path`.
///
/// The whole buffer is synthesized before the destination is touched; on any
/// error no file is left at `path`. The returned `wav.wav_data` is empty.
pub fn generate_to_file(
    params: &WaveParams,
    path: impl AsRef<Path>,
) -> AudioResult<GenerateResult> {
    let params_hash = params_hash(params)?;
    let rendered = render(params)?;
    let wav = encode_to_file(rendered.buffer, WavFormat::from_params(params), path)?;

    Ok(GenerateResult {
        waveform: params.waveform,
        params_hash,
        peak: rendered.reference_peak,
        wav,
    })
}

fn params_hash(params: &WaveParams) -> AudioResult<String> {
    canonical_params_hash(params).map_err(|e| AudioError::invalid_param("params", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn short(waveform: Waveform) -> WaveParams {
        WaveParams::builder(waveform)
            .sample_rate(8000)
            .channels(1)
            .duration_seconds(1)
            .build()
    }

    #[test]
    fn test_generate_sine_in_memory() {
        let params = short(Waveform::Sine);
        let result = generate(&params).unwrap();

        assert_eq!(result.waveform, Waveform::Sine);
        assert_eq!(result.wav.num_frames, 8000);
        assert_eq!(result.wav.data_size, 16000);
        assert_eq!(result.wav.wav_data.len(), 44 + 16000);
        assert_eq!(result.params_hash, canonical_params_hash(&params).unwrap());
        assert!(result.peak > 0.99 && result.peak <= 1.0);
    }

    #[test]
    fn test_generate_square_uses_unit_peak() {
        let params = WaveParams::builder(Waveform::Square)
            .amplitude(5.0)
            .sample_rate(8000)
            .channels(1)
            .duration_seconds(1)
            .build();
        let result = generate(&params).unwrap();
        assert_eq!(result.peak, 1.0);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let params = short(Waveform::Triangle);
        let a = generate(&params).unwrap();
        let b = generate(&params).unwrap();
        assert_eq!(a.wav.pcm_hash, b.wav.pcm_hash);
        assert_eq!(a.wav.wav_data, b.wav.wav_data);
    }

    #[test]
    fn test_generate_rejects_invalid_params() {
        let params = WaveParams::builder(Waveform::Sine).amplitude(0.0).build();
        let err = generate(&params).unwrap_err();
        assert!(matches!(
            err,
            AudioError::InvalidParameters { ref name, .. } if name == "amplitude"
        ));
    }

    #[test]
    fn test_generate_to_file_matches_in_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sine.wav");
        let params = short(Waveform::Sine);

        let on_disk = generate_to_file(&params, &path).unwrap();
        let in_memory = generate(&params).unwrap();

        assert!(on_disk.wav.wav_data.is_empty());
        assert_eq!(on_disk.wav.pcm_hash, in_memory.wav.pcm_hash);
        assert_eq!(std::fs::read(&path).unwrap(), in_memory.wav.wav_data);
    }
}
