//! Template command implementation
//!
//! Prints a default parameter document that can be edited and passed back
//! with `--params`.

use anyhow::Result;
use std::process::ExitCode;
use wavegen_spec::{WaveParams, Waveform};

/// Run the template command
///
/// # Arguments
/// * `waveform` - Waveform to put in the template
///
/// # Returns
/// Exit code: always 0
pub fn run(waveform: Waveform) -> Result<ExitCode> {
    println!("{}", render(waveform)?);
    Ok(ExitCode::SUCCESS)
}

/// Renders the default parameter document for `waveform`.
pub fn render(waveform: Waveform) -> Result<String> {
    Ok(WaveParams::builder(waveform).build().to_json_pretty()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn template_round_trips_through_loader() {
        for waveform in Waveform::ALL {
            let json = render(waveform).unwrap();
            let params = WaveParams::from_json(&json).unwrap();
            assert_eq!(params, WaveParams::builder(waveform).build());
        }
    }

    #[test]
    fn template_lists_every_field() {
        let json = render(Waveform::Triangle).unwrap();
        for field in [
            "\"waveform\": \"triangle\"",
            "\"amplitude\"",
            "\"frequency\"",
            "\"sample_rate\": 44100",
            "\"channels\": 2",
            "\"duration_seconds\": 3",
        ] {
            assert!(json.contains(field), "missing {} in {}", field, json);
        }
    }
}
