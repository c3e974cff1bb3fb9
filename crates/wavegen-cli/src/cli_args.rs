//! CLI argument definitions for the wavegen command-line interface.
//!
//! All `#[derive(Parser)]`, `#[derive(Subcommand)]` and `#[derive(Args)]`
//! types are defined here, keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};
use wavegen_cli::commands::generate::DEFAULT_OUTPUT;
use wavegen_cli::input::ParamOverrides;
use wavegen_spec::Waveform;

/// wavegen - Deterministic waveform synthesis to PCM WAV
#[derive(Parser)]
#[command(name = "wavegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Synthesize a waveform and write it as a WAV file
    Generate {
        #[command(flatten)]
        params: ParamArgs,

        /// Output WAV file path
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: String,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate parameters without generating audio
    Validate {
        #[command(flatten)]
        params: ParamArgs,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print a default parameter document
    Template {
        /// Waveform to use in the template (sine, square, triangle)
        #[arg(short, long, default_value = "sine")]
        waveform: Waveform,
    },
}

/// Parameter source shared by `generate` and `validate`.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct ParamArgs {
    /// Path to a JSON parameter document
    #[arg(short, long)]
    pub params: Option<String>,

    /// Waveform shape (sine, square, triangle)
    #[arg(short, long)]
    pub waveform: Option<Waveform>,

    /// Peak amplitude before normalization
    #[arg(long)]
    pub amplitude: Option<f64>,

    /// Frequency in Hz
    #[arg(short, long)]
    pub frequency: Option<f64>,

    /// Sample rate in Hz
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Number of output channels
    #[arg(short, long)]
    pub channels: Option<u16>,

    /// Duration in whole seconds
    #[arg(short, long)]
    pub duration: Option<u32>,
}

impl ParamArgs {
    /// Collects the flag values that override the parameter document.
    pub fn overrides(&self) -> ParamOverrides {
        ParamOverrides {
            waveform: self.waveform,
            amplitude: self.amplitude,
            frequency: self.frequency,
            sample_rate: self.sample_rate,
            channels: self.channels,
            duration_seconds: self.duration,
        }
    }
}
