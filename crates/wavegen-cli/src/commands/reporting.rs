//! Colored console output shared by commands.

use colored::Colorize;
use wavegen_spec::{ValidationResult, WaveParams};

/// Print the effective parameter block.
pub(super) fn print_params(params: &WaveParams) {
    println!("{}", "Parameters:".cyan().bold());
    println!("  {:<12} {}", "Amplitude".dimmed(), params.amplitude);
    println!("  {:<12} {} Hz", "Frequency".dimmed(), params.frequency);
    println!("  {:<12} {} Hz", "Sample rate".dimmed(), params.sample_rate);
    println!("  {:<12} {}", "Channels".dimmed(), params.channels);
    println!("  {:<12} {} s", "Duration".dimmed(), params.duration_seconds);
    println!("  {:<12} {}", "Wave type".dimmed(), params.waveform.label());
}

/// Print validation errors and warnings with their codes.
pub(super) fn print_validation_messages(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.to_string().red(),
                path_info.dimmed(),
                error.message
            );
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            let path_info = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                path_info.dimmed(),
                warning.message
            );
        }
    }
}

/// Print a JSON document to stdout.
pub(super) fn print_json<T: serde::Serialize>(output: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(output)?;
    println!("{}", json);
    Ok(())
}
