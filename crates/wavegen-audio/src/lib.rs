//! wavegen audio backend
//!
//! Deterministic synthesis of periodic waveforms and their encoding as
//! canonical 16-bit PCM WAV files.
//!
//! # Overview
//!
//! Generation runs in two passes over one owned buffer:
//!
//! - **Synthesis** - sine, square or triangle samples are rendered for every
//!   time index, copied once per channel, then normalized so the positive
//!   peak lands on 32760.
//! - **Encoding** - the buffer is narrowed to `i16` and written behind a
//!   44-byte RIFF/WAVE header.
//!
//! # Determinism
//!
//! Identical parameters produce byte-identical output. Files carry no
//! timestamps or optional chunks, and the PCM hash covers the data chunk only.
//!
//! # Example
//!
//! ```no_run
//! use wavegen_audio::generate_to_file;
//! use wavegen_spec::{WaveParams, Waveform};
//!
//! let params = WaveParams::builder(Waveform::Sine).frequency(880.0).build();
//! let result = generate_to_file(&params, "mywave.wav")?;
//! println!("PCM hash: {}", result.wav.pcm_hash);
//! # Ok::<(), wavegen_audio::AudioError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - In-memory generation entry point
//! - [`buffer`] - Owned interleaved sample buffer
//! - [`synthesis`] - Oscillators and normalization
//! - [`wav`] - Deterministic WAV file writer

pub mod buffer;
pub mod error;
pub mod generate;
pub mod synthesis;
pub mod wav;

pub use buffer::SampleBuffer;
pub use error::{AudioError, AudioResult};
pub use generate::{generate, generate_to_file, GenerateResult};
pub use synthesis::{synthesize, Oscillator, PeakReference};
pub use wav::{encode, encode_to_file, WavFormat, WavHeader, WavResult};
