//! Canonical 44-byte RIFF/WAVE PCM header.

use crate::error::{AudioError, AudioResult};

use super::format::WavFormat;

/// Encoded header length in bytes.
pub const HEADER_LEN: usize = 44;

/// `ChunkSize` counts everything after its own field except the data payload.
const RIFF_OVERHEAD: u32 = 36;

/// fmt sub-chunk payload size for PCM.
const FMT_CHUNK_SIZE: u32 = 16;

/// `AudioFormat` tag for uncompressed PCM.
const AUDIO_FORMAT_PCM: u16 = 1;

/// Header fields derived from a format and a sample count.
///
/// Every field is checked to fit its on-disk width when the header is built,
/// so serializing it cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    format: WavFormat,
    byte_rate: u32,
    block_align: u16,
    data_size: u32,
    chunk_size: u32,
}

impl WavHeader {
    /// Derives the header for `sample_count` interleaved samples.
    ///
    /// # Errors
    /// [`AudioError::InvalidParameters`] if the format has no channels or a
    /// zero sample rate, the sample count is not a whole number of frames, or
    /// any size field would overflow its width.
    pub fn for_samples(format: &WavFormat, sample_count: usize) -> AudioResult<Self> {
        if format.channels == 0 {
            return Err(AudioError::invalid_param(
                "channels",
                "WAV output needs at least one channel",
            ));
        }
        if format.sample_rate == 0 {
            return Err(AudioError::invalid_param(
                "sample_rate",
                "WAV output needs a non-zero sample rate",
            ));
        }
        if sample_count % usize::from(format.channels) != 0 {
            return Err(AudioError::invalid_param(
                "channels",
                format!(
                    "{} samples do not divide into {}-channel frames",
                    sample_count, format.channels
                ),
            ));
        }

        let block_align = format.block_align().ok_or_else(|| {
            AudioError::invalid_param("channels", "block align exceeds 16 bits")
        })?;
        let byte_rate = format.byte_rate().ok_or_else(|| {
            AudioError::invalid_param("sample_rate", "byte rate exceeds 32 bits")
        })?;

        let data_size = sample_count
            .checked_mul(usize::from(format.bytes_per_sample()))
            .and_then(|size| u32::try_from(size).ok())
            .and_then(|size| size.checked_add(RIFF_OVERHEAD).map(|_| size))
            .ok_or_else(|| {
                AudioError::invalid_param(
                    "duration_seconds",
                    format!(
                        "{} samples exceed the 32-bit RIFF size limit",
                        sample_count
                    ),
                )
            })?;

        Ok(Self {
            format: *format,
            byte_rate,
            block_align,
            data_size,
            chunk_size: RIFF_OVERHEAD + data_size,
        })
    }

    /// Format the header describes.
    pub fn format(&self) -> &WavFormat {
        &self.format
    }

    /// `ByteRate`: bytes per second.
    pub fn byte_rate(&self) -> u32 {
        self.byte_rate
    }

    /// `BlockAlign`: bytes per frame.
    pub fn block_align(&self) -> u16 {
        self.block_align
    }

    /// `Subchunk2Size`: length of the PCM payload in bytes.
    pub fn data_size(&self) -> u32 {
        self.data_size
    }

    /// `ChunkSize`: `36 + data_size`.
    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    /// Number of frames described by the header.
    pub fn num_frames(&self) -> usize {
        self.data_size as usize / usize::from(self.block_align)
    }

    /// Serializes the header, all integers little-endian.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0u8; HEADER_LEN];

        // RIFF chunk descriptor
        bytes[0..4].copy_from_slice(b"RIFF");
        bytes[4..8].copy_from_slice(&self.chunk_size.to_le_bytes());
        bytes[8..12].copy_from_slice(b"WAVE");

        // fmt sub-chunk
        bytes[12..16].copy_from_slice(b"fmt ");
        bytes[16..20].copy_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
        bytes[20..22].copy_from_slice(&AUDIO_FORMAT_PCM.to_le_bytes());
        bytes[22..24].copy_from_slice(&self.format.channels.to_le_bytes());
        bytes[24..28].copy_from_slice(&self.format.sample_rate.to_le_bytes());
        bytes[28..32].copy_from_slice(&self.byte_rate.to_le_bytes());
        bytes[32..34].copy_from_slice(&self.block_align.to_le_bytes());
        bytes[34..36].copy_from_slice(&self.format.bits_per_sample.to_le_bytes());

        // data sub-chunk
        bytes[36..40].copy_from_slice(b"data");
        bytes[40..44].copy_from_slice(&self.data_size.to_le_bytes());

        bytes
    }
}
