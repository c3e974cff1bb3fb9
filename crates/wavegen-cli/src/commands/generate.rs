//! Generate command implementation
//!
//! Synthesizes a waveform and writes it as a 16-bit PCM WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use wavegen_audio::generate_to_file;
use wavegen_spec::{validate_params, BackendError};

use super::json_output::{
    backend_error_to_json, error_codes, input_error_to_json, validation_error_to_json,
    validation_warning_to_json, GenerateOutput, GenerateResult, JsonError, JsonWarning,
};
use super::reporting;
use crate::input::{load_params, LoadResult, ParamOverrides};

/// Default output path.
pub const DEFAULT_OUTPUT: &str = "mywave.wav";

/// Run the generate command
///
/// # Arguments
/// * `params_path` - Optional JSON parameter document
/// * `overrides` - Per-field overrides from command-line flags
/// * `output` - Destination WAV path
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success, 1 on invalid parameters or generation failure
pub fn run(
    params_path: Option<&str>,
    overrides: &ParamOverrides,
    output: &str,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(params_path, overrides, output)
    } else {
        run_human(params_path, overrides, output)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(
    params_path: Option<&str>,
    overrides: &ParamOverrides,
    output: &str,
) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Generating:".cyan().bold(), output);

    let LoadResult {
        params,
        source_hash,
    } = load_params(params_path.map(Path::new), overrides).with_context(|| {
        format!(
            "Failed to load parameter file: {}",
            params_path.unwrap_or("<defaults>")
        )
    })?;

    if let (Some(path), Some(hash)) = (params_path, &source_hash) {
        println!("{} {} ({})", "Source:".dimmed(), path, &hash[..16]);
    }
    reporting::print_params(&params);

    let validation = validate_params(&params);
    reporting::print_validation_messages(&validation);
    if !validation.is_ok() {
        println!(
            "\n{} Parameters have {} error(s)",
            "FAILED".red().bold(),
            validation.errors.len()
        );
        return Ok(ExitCode::from(1));
    }

    match generate_to_file(&params, output) {
        Ok(result) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            println!("\n{} {}", "Output:".cyan().bold(), output);
            println!(
                "  {} bytes, {} frames, {:.2}s of audio",
                result.wav.file_size(),
                result.wav.num_frames,
                result.wav.duration_seconds()
            );
            println!("  {} {}", "PCM hash:".dimmed(), result.wav.pcm_hash);
            println!("  {} {}", "Params hash:".dimmed(), result.params_hash);
            println!(
                "\n{} Generated {} ({}ms)",
                "SUCCESS".green().bold(),
                params.waveform.label(),
                duration_ms
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!(
                "\n{} [{}] {}",
                "GENERATION FAILED".red().bold(),
                e.code(),
                e.message()
            );
            Ok(ExitCode::from(1))
        }
    }
}

/// Run generate with machine-readable JSON output
fn run_json(
    params_path: Option<&str>,
    overrides: &ParamOverrides,
    output: &str,
) -> Result<ExitCode> {
    let start = Instant::now();

    let LoadResult {
        params,
        source_hash,
    } = match load_params(params_path.map(Path::new), overrides) {
        Ok(loaded) => loaded,
        Err(e) => {
            let error = input_error_to_json(&e, params_path);
            reporting::print_json(&GenerateOutput::failure(vec![error], vec![]))?;
            return Ok(ExitCode::from(1));
        }
    };

    let validation = validate_params(&params);
    let warnings: Vec<JsonWarning> = validation
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();

    if !validation.is_ok() {
        let mut errors = vec![JsonError::new(
            error_codes::INVALID_PARAMS,
            format!("Parameters have {} error(s)", validation.errors.len()),
        )];
        errors.extend(validation.errors.iter().map(validation_error_to_json));
        reporting::print_json(&GenerateOutput::failure(errors, warnings))?;
        return Ok(ExitCode::from(1));
    }

    let output_json = match generate_to_file(&params, output) {
        Ok(result) => GenerateOutput::success(
            GenerateResult {
                params,
                params_hash: result.params_hash,
                source_hash,
                output: output.to_string(),
                file_size: result.wav.file_size(),
                pcm_hash: result.wav.pcm_hash,
                num_frames: result.wav.num_frames,
                peak: result.peak,
                duration_ms: start.elapsed().as_millis() as u64,
            },
            warnings,
        ),
        Err(e) => {
            let error = backend_error_to_json(&e).with_file(output);
            GenerateOutput::failure(vec![error], warnings)
        }
    };

    reporting::print_json(&output_json)?;

    if output_json.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
