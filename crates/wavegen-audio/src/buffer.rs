//! Owned sample buffer produced by synthesis.

/// Interleaved real-valued samples.
///
/// The buffer is filled and normalized by the synthesizer, then moved into
/// the encoder. No mutable access is exposed once it has been built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleBuffer {
    samples: Vec<f64>,
}

impl SampleBuffer {
    /// Number of samples across all channels.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Borrows the interleaved samples.
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Iterates over frames of `channels` consecutive samples.
    ///
    /// A zero channel count is treated as mono. A trailing partial frame is
    /// skipped.
    pub fn frames(&self, channels: u16) -> std::slice::ChunksExact<'_, f64> {
        self.samples.chunks_exact(usize::from(channels.max(1)))
    }

    /// Largest sample, or `None` if the buffer is empty.
    pub fn max(&self) -> Option<f64> {
        self.samples.iter().copied().reduce(f64::max)
    }

    /// Smallest sample, or `None` if the buffer is empty.
    pub fn min(&self) -> Option<f64> {
        self.samples.iter().copied().reduce(f64::min)
    }

    /// Consumes the buffer and returns the raw samples.
    pub fn into_inner(self) -> Vec<f64> {
        self.samples
    }
}

impl From<Vec<f64>> for SampleBuffer {
    fn from(samples: Vec<f64>) -> Self {
        Self { samples }
    }
}
