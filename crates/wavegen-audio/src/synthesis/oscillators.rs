//! Periodic waveform oscillators (sine, square, triangle).
//!
//! Each oscillator maps a sample index straight to a raw value, so a sample
//! never depends on the ones computed before it.

use std::f64::consts::TAU;

use super::{Oscillator, PeakReference};

/// Phase in radians of sample `index`: `2 * pi * index * frequency / sample_rate`.
#[inline]
pub fn phase_at(index: usize, frequency: f64, sample_rate: f64) -> f64 {
    (TAU * index as f64 * frequency) / sample_rate
}

/// Position of sample `index` within its period, in `[0, 1)`.
#[inline]
pub fn cycle_position(index: usize, frequency: f64, sample_rate: f64) -> f64 {
    (index as f64 * frequency / sample_rate).fract()
}

/// Sine oscillator scaled by amplitude.
#[derive(Debug, Clone, Copy)]
pub struct SineOsc {
    /// Peak amplitude.
    pub amplitude: f64,
    /// Frequency in Hz.
    pub frequency: f64,
    /// Sample rate in Hz.
    pub sample_rate: f64,
}

impl SineOsc {
    /// Creates a new sine oscillator.
    pub fn new(amplitude: f64, frequency: f64, sample_rate: f64) -> Self {
        Self {
            amplitude,
            frequency,
            sample_rate,
        }
    }
}

impl Oscillator for SineOsc {
    fn sample_at(&self, index: usize) -> f64 {
        self.amplitude * phase_at(index, self.frequency, self.sample_rate).sin()
    }

    fn peak_reference(&self) -> PeakReference {
        PeakReference::Tracked
    }
}

/// Square oscillator taking the sign of the sine.
///
/// Produces exactly `-1.0`, `0.0` or `1.0`; amplitude plays no part since the
/// shape is normalized against its fixed unit peak.
#[derive(Debug, Clone, Copy)]
pub struct SquareOsc {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Sample rate in Hz.
    pub sample_rate: f64,
}

impl SquareOsc {
    /// Creates a new square oscillator.
    pub fn new(frequency: f64, sample_rate: f64) -> Self {
        Self {
            frequency,
            sample_rate,
        }
    }
}

impl Oscillator for SquareOsc {
    fn sample_at(&self, index: usize) -> f64 {
        let value = phase_at(index, self.frequency, self.sample_rate).sin();
        if value > 0.0 {
            1.0
        } else if value < 0.0 {
            -1.0
        } else {
            0.0
        }
    }

    fn peak_reference(&self) -> PeakReference {
        PeakReference::Fixed(1.0)
    }
}

/// Triangle oscillator ramping linearly between `-amplitude` and `+amplitude`.
///
/// Phase-aligned with [`SineOsc`]: zero and rising at the start of each
/// period, peak at a quarter, zero at half, trough at three quarters.
#[derive(Debug, Clone, Copy)]
pub struct TriangleOsc {
    /// Peak amplitude.
    pub amplitude: f64,
    /// Frequency in Hz.
    pub frequency: f64,
    /// Sample rate in Hz.
    pub sample_rate: f64,
}

impl TriangleOsc {
    /// Creates a new triangle oscillator.
    pub fn new(amplitude: f64, frequency: f64, sample_rate: f64) -> Self {
        Self {
            amplitude,
            frequency,
            sample_rate,
        }
    }
}

impl Oscillator for TriangleOsc {
    fn sample_at(&self, index: usize) -> f64 {
        let p = cycle_position(index, self.frequency, self.sample_rate);
        let unit = if p < 0.25 {
            4.0 * p
        } else if p < 0.75 {
            2.0 - 4.0 * p
        } else {
            4.0 * p - 4.0
        };
        self.amplitude * unit
    }

    fn peak_reference(&self) -> PeakReference {
        PeakReference::Tracked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_sine_quarter_period_hits_amplitude() {
        // 4 samples per period: 0, +A, 0, -A
        let osc = SineOsc::new(2.5, 1000.0, 4000.0);
        assert!(osc.sample_at(0).abs() < EPS);
        assert!((osc.sample_at(1) - 2.5).abs() < EPS);
        assert!(osc.sample_at(2).abs() < EPS);
        assert!((osc.sample_at(3) + 2.5).abs() < EPS);
    }

    #[test]
    fn test_square_maps_sign_of_sine() {
        let osc = SquareOsc::new(1000.0, 8000.0);
        assert_eq!(osc.sample_at(0), 0.0);
        assert_eq!(osc.sample_at(1), 1.0);
        assert_eq!(osc.sample_at(3), 1.0);
        // sin(TAU * 4 / 8) rounds to +1.2e-16, not 0, so the half-period
        // sample is high.
        assert_eq!(osc.sample_at(4), 1.0);
        assert_eq!(osc.sample_at(5), -1.0);
        assert_eq!(osc.sample_at(7), -1.0);
        assert_eq!(osc.peak_reference(), PeakReference::Fixed(1.0));
    }

    #[test]
    fn test_square_ignores_amplitude_entirely() {
        let osc = SquareOsc::new(440.0, 44100.0);
        for i in 0..1000 {
            let v = osc.sample_at(i);
            assert!(v == -1.0 || v == 0.0 || v == 1.0, "sample {i} = {v}");
        }
    }

    #[test]
    fn test_triangle_shape() {
        // 8 samples per period
        let osc = TriangleOsc::new(1.0, 1000.0, 8000.0);
        let expected = [0.0, 0.5, 1.0, 0.5, 0.0, -0.5, -1.0, -0.5];
        for (i, &want) in expected.iter().enumerate() {
            assert!(
                (osc.sample_at(i) - want).abs() < EPS,
                "index {i}: expected {want}, got {}",
                osc.sample_at(i)
            );
        }
        // Next period repeats
        assert!((osc.sample_at(10) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_triangle_scales_with_amplitude() {
        let osc = TriangleOsc::new(3.0, 1000.0, 8000.0);
        assert!((osc.sample_at(2) - 3.0).abs() < EPS);
        assert!((osc.sample_at(6) + 3.0).abs() < EPS);
    }

    #[test]
    fn test_triangle_stays_within_amplitude() {
        let osc = TriangleOsc::new(0.8, 440.0, 44100.0);
        for i in 0..44100 {
            let v = osc.sample_at(i);
            assert!(v.abs() <= 0.8 + EPS, "sample {i} = {v}");
        }
    }
}
