//! wavegen CLI - Command-line interface for waveform synthesis
//!
//! This binary provides commands for generating WAV files, validating
//! parameters and printing parameter templates.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use cli_args::{Cli, Commands};
use wavegen_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            params,
            output,
            json,
        } => commands::generate::run(
            params.params.as_deref(),
            &params.overrides(),
            &output,
            json,
        ),
        Commands::Validate { params, json } => {
            commands::validate::run(params.params.as_deref(), &params.overrides(), json)
        }
        Commands::Template { waveform } => commands::template::run(waveform),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wavegen_spec::Waveform;

    #[test]
    fn test_cli_parses_generate_defaults() {
        let cli = Cli::try_parse_from(["wavegen", "generate"]).unwrap();
        match cli.command {
            Commands::Generate {
                params,
                output,
                json,
            } => {
                assert_eq!(output, "mywave.wav");
                assert!(!json);
                assert!(params.params.is_none());
                assert!(params.overrides().is_empty());
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_generate_flags() {
        let cli = Cli::try_parse_from([
            "wavegen",
            "generate",
            "--waveform",
            "square",
            "--amplitude",
            "0.5",
            "--frequency",
            "880",
            "--sample-rate",
            "22050",
            "--channels",
            "1",
            "--duration",
            "2",
            "-o",
            "out.wav",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                params,
                output,
                json,
            } => {
                let overrides = params.overrides();
                assert_eq!(overrides.waveform, Some(Waveform::Square));
                assert_eq!(overrides.amplitude, Some(0.5));
                assert_eq!(overrides.frequency, Some(880.0));
                assert_eq!(overrides.sample_rate, Some(22050));
                assert_eq!(overrides.channels, Some(1));
                assert_eq!(overrides.duration_seconds, Some(2));
                assert_eq!(output, "out.wav");
                assert!(json);
            }
            _ => panic!("expected generate command"),
        }
    }

    #[test]
    fn test_cli_parses_validate_with_params_file() {
        let cli =
            Cli::try_parse_from(["wavegen", "validate", "--params", "wave.json", "--json"])
                .unwrap();
        match cli.command {
            Commands::Validate { params, json } => {
                assert_eq!(params.params.as_deref(), Some("wave.json"));
                assert!(json);
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_cli_parses_template() {
        let cli = Cli::try_parse_from(["wavegen", "template", "--waveform", "triangle"]).unwrap();
        match cli.command {
            Commands::Template { waveform } => assert_eq!(waveform, Waveform::Triangle),
            _ => panic!("expected template command"),
        }

        let cli = Cli::try_parse_from(["wavegen", "template"]).unwrap();
        match cli.command {
            Commands::Template { waveform } => assert_eq!(waveform, Waveform::Sine),
            _ => panic!("expected template command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_waveform() {
        assert!(Cli::try_parse_from(["wavegen", "generate", "--waveform", "sawtooth"]).is_err());
    }

    #[test]
    fn test_cli_rejects_negative_channels() {
        assert!(Cli::try_parse_from(["wavegen", "generate", "--channels", "-1"]).is_err());
    }
}
