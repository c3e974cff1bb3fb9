//! Integration tests for waveform synthesis and normalization.

use proptest::prelude::*;
use wavegen_audio::{synthesize, AudioError};
use wavegen_spec::{WaveParams, Waveform};

const TOLERANCE: f64 = 1e-6;

fn params(waveform: Waveform, sample_rate: u32, channels: u16) -> WaveParams {
    WaveParams::builder(waveform)
        .amplitude(1.0)
        .frequency(440.0)
        .sample_rate(sample_rate)
        .channels(channels)
        .duration_seconds(1)
        .build()
}

#[test]
fn test_sine_8khz_mono_reaches_both_peaks() {
    let buffer = synthesize(&params(Waveform::Sine, 8000, 1)).unwrap();

    assert_eq!(buffer.len(), 8000);
    let max = buffer.max().unwrap();
    let min = buffer.min().unwrap();
    assert!((max - 32760.0).abs() < TOLERANCE, "max was {}", max);
    assert!((min + 32760.0).abs() < TOLERANCE, "min was {}", min);
    assert!(min >= -32760.0 - TOLERANCE);
}

#[test]
fn test_sine_starts_at_zero() {
    let buffer = synthesize(&params(Waveform::Sine, 8000, 1)).unwrap();
    assert_eq!(buffer.as_slice()[0], 0.0);
}

#[test]
fn test_square_only_three_levels() {
    let buffer = synthesize(&params(Waveform::Square, 8000, 2)).unwrap();
    for &sample in buffer.as_slice() {
        assert!(
            sample == 32760.0 || sample == -32760.0 || sample == 0.0,
            "unexpected square sample {}",
            sample
        );
    }
    assert!(buffer.as_slice().contains(&32760.0));
    assert!(buffer.as_slice().contains(&-32760.0));
}

#[test]
fn test_square_ignores_amplitude() {
    let quiet = synthesize(&params(Waveform::Square, 8000, 1)).unwrap();
    let loud = synthesize(
        &WaveParams::builder(Waveform::Square)
            .amplitude(12.5)
            .frequency(440.0)
            .sample_rate(8000)
            .channels(1)
            .duration_seconds(1)
            .build(),
    )
    .unwrap();
    assert_eq!(quiet, loud);
}

#[test]
fn test_triangle_peaks_and_shape() {
    let buffer = synthesize(&params(Waveform::Triangle, 8000, 1)).unwrap();
    let samples = buffer.as_slice();

    assert_eq!(samples[0], 0.0);
    assert!(samples[1] > 0.0);
    assert!((buffer.max().unwrap() - 32760.0).abs() < TOLERANCE);
    assert!(buffer.min().unwrap() >= -32760.0 - TOLERANCE);
}

#[test]
fn test_amplitude_does_not_change_normalized_sine() {
    let unit = synthesize(&params(Waveform::Sine, 8000, 1)).unwrap();
    let scaled = synthesize(
        &WaveParams::builder(Waveform::Sine)
            .amplitude(3.0)
            .frequency(440.0)
            .sample_rate(8000)
            .channels(1)
            .duration_seconds(1)
            .build(),
    )
    .unwrap();

    for (a, b) in unit.as_slice().iter().zip(scaled.as_slice()) {
        assert!((a - b).abs() < TOLERANCE);
    }
}

#[test]
fn test_zero_amplitude_rejected() {
    let params = WaveParams::builder(Waveform::Sine).amplitude(0.0).build();
    let err = synthesize(&params).unwrap_err();
    assert!(matches!(err, AudioError::InvalidParameters { .. }));
}

#[test]
fn test_invalid_values_rejected() {
    let cases = [
        WaveParams::builder(Waveform::Sine).amplitude(-1.0).build(),
        WaveParams::builder(Waveform::Sine).frequency(0.0).build(),
        WaveParams::builder(Waveform::Sine).frequency(f64::NAN).build(),
        WaveParams::builder(Waveform::Triangle).sample_rate(0).build(),
        WaveParams::builder(Waveform::Square).channels(0).build(),
        WaveParams::builder(Waveform::Square).duration_seconds(0).build(),
    ];
    for params in cases {
        assert!(
            matches!(synthesize(&params), Err(AudioError::InvalidParameters { .. })),
            "expected rejection for {:?}",
            params
        );
    }
}

#[test]
fn test_channels_replicated() {
    let buffer = synthesize(&params(Waveform::Sine, 8000, 3)).unwrap();
    assert_eq!(buffer.len(), 24000);
    for frame in buffer.frames(3) {
        assert_eq!(frame[0].to_bits(), frame[1].to_bits());
        assert_eq!(frame[0].to_bits(), frame[2].to_bits());
    }
}

fn waveform_strategy() -> impl Strategy<Value = Waveform> {
    prop::sample::select(Waveform::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_buffer_length_and_replication(
        waveform in waveform_strategy(),
        sample_rate in 8u32..4000,
        channels in 1u16..=4,
        duration in 1u32..=2,
        ratio in 0.01f64..0.25,
    ) {
        let params = WaveParams::builder(waveform)
            .frequency(f64::from(sample_rate) * ratio)
            .sample_rate(sample_rate)
            .channels(channels)
            .duration_seconds(duration)
            .build();

        let buffer = synthesize(&params).unwrap();
        let expected = sample_rate as usize * duration as usize * usize::from(channels);
        prop_assert_eq!(buffer.len(), expected);

        for frame in buffer.frames(channels) {
            prop_assert!(frame.iter().all(|s| s.to_bits() == frame[0].to_bits()));
        }

        prop_assert!(buffer.max().unwrap() <= 32760.0 + TOLERANCE);
    }
}
