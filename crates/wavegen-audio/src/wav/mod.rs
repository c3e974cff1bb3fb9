//! Deterministic WAV file writer.
//!
//! Writes canonical 44-byte-header, 16-bit PCM WAV files with no timestamps
//! or optional chunks, so identical buffers always encode to identical bytes.

mod file;
mod format;
mod header;
mod result;
mod writer;


// Re-export public API
pub use file::encode_to_file;
pub use format::{WavFormat, BITS_PER_SAMPLE};
pub use header::{WavHeader, HEADER_LEN};
pub use result::WavResult;
pub use writer::{encode, samples_to_pcm16, write_wav, write_wav_to_vec};
