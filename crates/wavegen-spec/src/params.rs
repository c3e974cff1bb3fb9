//! Waveform parameter document.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::SpecError;

/// Default peak amplitude before normalization.
pub const DEFAULT_AMPLITUDE: f64 = 1.0;
/// Default frequency in Hz.
pub const DEFAULT_FREQUENCY: f64 = 440.0;
/// Default sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;
/// Default channel count.
pub const DEFAULT_CHANNELS: u16 = 2;
/// Default duration in seconds.
pub const DEFAULT_DURATION_SECONDS: u32 = 3;

/// Periodic waveform shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Sine wave.
    #[default]
    Sine,
    /// Square wave.
    Square,
    /// Triangle wave.
    Triangle,
}

impl Waveform {
    /// All supported waveforms, in declaration order.
    pub const ALL: [Waveform; 3] = [Waveform::Sine, Waveform::Square, Waveform::Triangle];

    /// Returns the lowercase identifier used in parameter documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Triangle => "triangle",
        }
    }

    /// Returns the uppercase wave-type tag shown in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Waveform::Sine => "SINE",
            Waveform::Square => "SQUARE",
            Waveform::Triangle => "TRIANGLE",
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a waveform name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown waveform '{0}' (expected sine, square, or triangle)")]
pub struct ParseWaveformError(pub String);

impl FromStr for Waveform {
    type Err = ParseWaveformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Waveform::ALL
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseWaveformError(s.to_string()))
    }
}

fn default_amplitude() -> f64 {
    DEFAULT_AMPLITUDE
}

fn default_frequency() -> f64 {
    DEFAULT_FREQUENCY
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE
}

fn default_channels() -> u16 {
    DEFAULT_CHANNELS
}

fn default_duration_seconds() -> u32 {
    DEFAULT_DURATION_SECONDS
}

/// Parameters describing one synthesized waveform.
///
/// Synthesis only ever borrows a `WaveParams`; once built it is not modified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WaveParams {
    /// Waveform shape.
    #[serde(default)]
    pub waveform: Waveform,
    /// Peak amplitude before normalization.
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
    /// Frequency in Hz.
    #[serde(default = "default_frequency")]
    pub frequency: f64,
    /// Sample rate in Hz.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,
    /// Number of interleaved channels.
    #[serde(default = "default_channels")]
    pub channels: u16,
    /// Duration in whole seconds.
    #[serde(default = "default_duration_seconds")]
    pub duration_seconds: u32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            waveform: Waveform::default(),
            amplitude: DEFAULT_AMPLITUDE,
            frequency: DEFAULT_FREQUENCY,
            sample_rate: DEFAULT_SAMPLE_RATE,
            channels: DEFAULT_CHANNELS,
            duration_seconds: DEFAULT_DURATION_SECONDS,
        }
    }
}

impl WaveParams {
    /// Starts building parameters for the given waveform, with defaults for
    /// everything else.
    pub fn builder(waveform: Waveform) -> WaveParamsBuilder {
        WaveParamsBuilder {
            params: WaveParams {
                waveform,
                ..WaveParams::default()
            },
        }
    }

    /// Parses a parameter document from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a parameter document from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SpecError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes the parameters as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of time indices (frames), or `None` on overflow.
    pub fn frame_count(&self) -> Option<usize> {
        let rate = usize::try_from(self.sample_rate).ok()?;
        let duration = usize::try_from(self.duration_seconds).ok()?;
        rate.checked_mul(duration)
    }

    /// Total number of interleaved samples, or `None` on overflow.
    pub fn sample_count(&self) -> Option<usize> {
        self.frame_count()?.checked_mul(usize::from(self.channels))
    }

    /// Nyquist limit for the configured sample rate, in Hz.
    pub fn nyquist(&self) -> f64 {
        f64::from(self.sample_rate) / 2.0
    }
}

/// Builder for [`WaveParams`].
#[derive(Debug, Clone)]
pub struct WaveParamsBuilder {
    params: WaveParams,
}

impl WaveParamsBuilder {
    /// Sets the peak amplitude.
    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.params.amplitude = amplitude;
        self
    }

    /// Sets the frequency in Hz.
    pub fn frequency(mut self, frequency: f64) -> Self {
        self.params.frequency = frequency;
        self
    }

    /// Sets the sample rate in Hz.
    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.params.sample_rate = sample_rate;
        self
    }

    /// Sets the channel count.
    pub fn channels(mut self, channels: u16) -> Self {
        self.params.channels = channels;
        self
    }

    /// Sets the duration in seconds.
    pub fn duration_seconds(mut self, duration_seconds: u32) -> Self {
        self.params.duration_seconds = duration_seconds;
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> WaveParams {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_documented_values() {
        let params = WaveParams::default();
        assert_eq!(params.waveform, Waveform::Sine);
        assert_eq!(params.amplitude, 1.0);
        assert_eq!(params.frequency, 440.0);
        assert_eq!(params.sample_rate, 44100);
        assert_eq!(params.channels, 2);
        assert_eq!(params.duration_seconds, 3);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let params = WaveParams::from_json(r#"{"waveform": "square", "frequency": 880.0}"#)
            .expect("should parse");
        assert_eq!(
            params,
            WaveParams::builder(Waveform::Square).frequency(880.0).build()
        );
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = WaveParams::from_json(r#"{"waveform": "sine", "volume": 0.5}"#).unwrap_err();
        assert!(matches!(err, SpecError::JsonParse(_)));
        assert!(err.to_string().contains("volume"));
    }

    #[test]
    fn test_from_json_rejects_unknown_waveform() {
        assert!(WaveParams::from_json(r#"{"waveform": "sawtooth"}"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let params = WaveParams::builder(Waveform::Triangle)
            .amplitude(0.5)
            .frequency(220.0)
            .sample_rate(22050)
            .channels(1)
            .duration_seconds(2)
            .build();
        let json = params.to_json_pretty().unwrap();
        assert!(json.contains("\"triangle\""));
        assert_eq!(WaveParams::from_json(&json).unwrap(), params);
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let err = WaveParams::from_file("/definitely/not/here/params.json").unwrap_err();
        assert!(matches!(err, SpecError::Io(_)));
    }

    #[test]
    fn test_sample_count() {
        let params = WaveParams::builder(Waveform::Sine)
            .sample_rate(44100)
            .channels(2)
            .duration_seconds(3)
            .build();
        assert_eq!(params.frame_count(), Some(132_300));
        assert_eq!(params.sample_count(), Some(264_600));
    }

    #[test]
    fn test_sample_count_overflow_is_none() {
        let params = WaveParams::builder(Waveform::Sine)
            .sample_rate(u32::MAX)
            .channels(u16::MAX)
            .duration_seconds(u32::MAX)
            .build();
        assert_eq!(params.sample_count(), None);
    }

    #[test]
    fn test_waveform_parse_and_labels() {
        assert_eq!("Sine".parse::<Waveform>().unwrap(), Waveform::Sine);
        assert_eq!(" square ".parse::<Waveform>().unwrap(), Waveform::Square);
        assert_eq!("TRIANGLE".parse::<Waveform>().unwrap(), Waveform::Triangle);
        assert!("saw".parse::<Waveform>().is_err());

        assert_eq!(Waveform::Square.label(), "SQUARE");
        assert_eq!(Waveform::Triangle.to_string(), "triangle");
    }
}
