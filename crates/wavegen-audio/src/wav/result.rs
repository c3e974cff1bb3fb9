//! WAV file generation result type.

use crate::buffer::SampleBuffer;
use crate::error::AudioResult;

use super::format::WavFormat;
use super::header::{WavHeader, HEADER_LEN};
use super::writer::{prepare, write_wav_to_vec};

/// Result of WAV file generation.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes (empty when the file was written to disk).
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM data chunk only.
    pub pcm_hash: String,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of frames (samples per channel).
    pub num_frames: usize,
    /// Size of the PCM data chunk in bytes.
    pub data_size: u32,
}

impl WavResult {
    /// Encodes a buffer into an in-memory WAV file.
    pub fn from_buffer(buffer: SampleBuffer, format: WavFormat) -> AudioResult<Self> {
        let (header, pcm) = prepare(buffer, &format)?;
        let wav_data = write_wav_to_vec(&header, &pcm);
        Ok(Self::from_parts(&header, &pcm, wav_data))
    }

    pub(crate) fn from_parts(header: &WavHeader, pcm: &[u8], wav_data: Vec<u8>) -> Self {
        Self {
            wav_data,
            pcm_hash: blake3::hash(pcm).to_hex().to_string(),
            channels: header.format().channels,
            sample_rate: header.format().sample_rate,
            num_frames: header.num_frames(),
            data_size: header.data_size(),
        }
    }

    /// Whether the output is stereo.
    pub fn is_stereo(&self) -> bool {
        self.channels == 2
    }

    /// Total file size in bytes: header plus data chunk.
    pub fn file_size(&self) -> usize {
        HEADER_LEN + self.data_size as usize
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / f64::from(self.sample_rate)
    }
}
