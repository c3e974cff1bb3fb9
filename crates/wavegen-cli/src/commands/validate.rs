//! Validate command implementation
//!
//! Loads parameters and reports every validation error and warning without
//! synthesizing anything.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use wavegen_audio::wav::HEADER_LEN;
use wavegen_spec::{canonical_params_hash, validate_params, WaveParams};

use super::json_output::{
    error_codes, input_error_to_json, validation_error_to_json, validation_warning_to_json,
    JsonError, JsonWarning, ValidateOutput, ValidateResult,
};
use super::reporting;
use crate::input::{load_params, LoadResult, ParamOverrides};

/// Run the validate command
///
/// # Arguments
/// * `params_path` - Optional JSON parameter document
/// * `overrides` - Per-field overrides from command-line flags
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(
    params_path: Option<&str>,
    overrides: &ParamOverrides,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(params_path, overrides)
    } else {
        run_human(params_path, overrides)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(params_path: Option<&str>, overrides: &ParamOverrides) -> Result<ExitCode> {
    let start = Instant::now();

    println!(
        "{} {}",
        "Validating:".cyan().bold(),
        params_path.unwrap_or("<defaults>")
    );

    let LoadResult {
        params,
        source_hash,
    } = load_params(params_path.map(Path::new), overrides).with_context(|| {
        format!(
            "Failed to load parameter file: {}",
            params_path.unwrap_or("<defaults>")
        )
    })?;

    if let Some(hash) = &source_hash {
        println!("{} {}", "Source hash:".dimmed(), &hash[..16]);
    }
    reporting::print_params(&params);

    let validation = validate_params(&params);
    reporting::print_validation_messages(&validation);

    let duration_ms = start.elapsed().as_millis() as u64;

    if validation.is_ok() {
        if let Some(size) = expected_file_size(&params) {
            println!("\n{} {} bytes", "Expected file size:".dimmed(), size);
        }
        println!(
            "\n{} Parameters are valid ({}ms)",
            "SUCCESS".green().bold(),
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Parameters have {} error(s) ({}ms)",
            "FAILED".red().bold(),
            validation.errors.len(),
            duration_ms
        );
        Ok(ExitCode::from(1))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(params_path: Option<&str>, overrides: &ParamOverrides) -> Result<ExitCode> {
    let LoadResult {
        params,
        source_hash,
    } = match load_params(params_path.map(Path::new), overrides) {
        Ok(loaded) => loaded,
        Err(e) => {
            let error = input_error_to_json(&e, params_path);
            reporting::print_json(&ValidateOutput::failure(vec![error], vec![]))?;
            return Ok(ExitCode::from(1));
        }
    };

    let validation = validate_params(&params);
    let warnings: Vec<JsonWarning> = validation
        .warnings
        .iter()
        .map(validation_warning_to_json)
        .collect();

    let output = match (validation.is_ok(), params.sample_count()) {
        (true, Some(sample_count)) => {
            let params_hash = canonical_params_hash(&params)?;
            let result = ValidateResult {
                params,
                params_hash,
                source_hash,
                sample_count,
                file_size: HEADER_LEN as u64 + sample_count as u64 * 2,
            };
            ValidateOutput::success(result, warnings)
        }
        _ => {
            let mut errors = vec![JsonError::new(
                error_codes::INVALID_PARAMS,
                format!("Parameters have {} error(s)", validation.errors.len()),
            )];
            errors.extend(validation.errors.iter().map(validation_error_to_json));
            ValidateOutput::failure(errors, warnings)
        }
    };

    reporting::print_json(&output)?;

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn expected_file_size(params: &WaveParams) -> Option<u64> {
    let samples = u64::try_from(params.sample_count()?).ok()?;
    Some(HEADER_LEN as u64 + samples * 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_params(dir: &tempfile::TempDir, filename: &str, json: &str) -> std::path::PathBuf {
        let path = dir.path().join(filename);
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn validate_defaults_succeed() {
        let code = run(None, &ParamOverrides::default(), false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn validate_file_with_errors_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_params(&tmp, "bad.json", r#"{ "amplitude": 0.0, "channels": 0 }"#);

        let code = run(path.to_str(), &ParamOverrides::default(), false).unwrap();
        assert_eq!(code, ExitCode::from(1));

        let code = run(path.to_str(), &ParamOverrides::default(), true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn validate_override_fixes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = write_params(&tmp, "bad.json", r#"{ "amplitude": 0.0 }"#);
        let overrides = ParamOverrides {
            amplitude: Some(0.5),
            ..Default::default()
        };

        let code = run(path.to_str(), &overrides, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn validate_json_output_failure() {
        let code = run(Some("/nonexistent/params.json"), &ParamOverrides::default(), true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn validate_human_missing_file_is_error() {
        let result = run(Some("/nonexistent/params.json"), &ParamOverrides::default(), false);
        assert!(result.is_err());
    }

    #[test]
    fn validate_warnings_do_not_fail() {
        let overrides = ParamOverrides {
            frequency: Some(30000.0),
            channels: Some(4),
            ..Default::default()
        };
        let code = run(None, &overrides, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn expected_file_size_for_defaults() {
        let params = WaveParams::default();
        assert_eq!(expected_file_size(&params), Some(44 + 44100 * 3 * 2 * 2));
    }
}
