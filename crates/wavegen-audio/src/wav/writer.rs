//! Core WAV writing and PCM conversion functions.

use std::io::{self, Write};

use crate::buffer::SampleBuffer;
use crate::error::AudioResult;

use super::format::WavFormat;
use super::header::{WavHeader, HEADER_LEN};

/// Converts samples to 16-bit little-endian PCM bytes.
///
/// Each sample is narrowed with `as i16`: the fractional part is truncated
/// toward zero with no rounding or dither. Samples are expected to already lie
/// in the normalized `[-32760, 32760]` range; anything outside `i16` saturates.
///
/// # Arguments
/// * `samples` - Normalized samples
///
/// # Returns
/// PCM data, two bytes per sample
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        pcm.extend_from_slice(&(sample as i16).to_le_bytes());
    }

    pcm
}

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `header` - Header describing `pcm_data`
/// * `pcm_data` - Raw PCM samples as bytes
///
/// # Returns
/// Result indicating success or I/O error
pub fn write_wav<W: Write>(writer: &mut W, header: &WavHeader, pcm_data: &[u8]) -> io::Result<()> {
    writer.write_all(&header.to_bytes())?;
    writer.write_all(pcm_data)?;
    Ok(())
}

/// Assembles a WAV file in memory.
pub fn write_wav_to_vec(header: &WavHeader, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    buffer.extend_from_slice(&header.to_bytes());
    buffer.extend_from_slice(pcm_data);
    buffer
}

/// Derives the header and PCM payload for a buffer.
///
/// Nothing is written; a buffer the header cannot describe is rejected here.
pub(crate) fn prepare(
    buffer: SampleBuffer,
    format: &WavFormat,
) -> AudioResult<(WavHeader, Vec<u8>)> {
    let header = WavHeader::for_samples(format, buffer.len())?;
    let pcm = samples_to_pcm16(buffer.as_slice());
    Ok((header, pcm))
}

/// Encodes a buffer as a WAV stream into any writer.
///
/// The header is derived before any byte is written, so an unrepresentable
/// buffer leaves the sink untouched.
///
/// # Arguments
/// * `buffer` - Normalized samples, consumed
/// * `format` - Channel count and sample rate
/// * `sink` - Destination writer
///
/// # Returns
/// The header that was written
///
/// # Errors
/// [`AudioError::InvalidParameters`](crate::AudioError::InvalidParameters) if
/// the buffer does not fit the format, [`AudioError::Io`](crate::AudioError::Io)
/// if writing fails.
pub fn encode<W: Write>(
    buffer: SampleBuffer,
    format: WavFormat,
    sink: &mut W,
) -> AudioResult<WavHeader> {
    let (header, pcm) = prepare(buffer, &format)?;
    write_wav(sink, &header, &pcm)?;
    Ok(header)
}
