//! Validate command implementation
//!
//! Checks a spec and resolves its parameters without rasterizing anything.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use pixelfolk_backend_sprite::character::RESOLVE_STREAM;
use pixelfolk_backend_sprite::resolve::resolve_body;
use pixelfolk_backend_sprite::DeterministicRng;
use pixelfolk_spec::{CharacterSpec, ResolvedParams, ResolvedValue};

use super::json_output::{error_codes, print_json, JsonError, ValidateOutput};
use crate::input::{build_spec, SpecArgs};

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(args: &SpecArgs, json_output: bool) -> Result<ExitCode> {
    let source = args.spec.as_deref().unwrap_or("<defaults>");
    let spec = match build_spec(args) {
        Ok(spec) => spec,
        Err(e) => {
            let error = JsonError::new(error_codes::SPEC_LOAD, format!("{:#}", e));
            return report_failure(source, error, json_output);
        }
    };

    match check(&spec) {
        Ok(params) if json_output => {
            print_json(&ValidateOutput::success(params))?;
            Ok(ExitCode::SUCCESS)
        }
        Ok(params) => {
            println!("{} {}", "Validating:".cyan().bold(), source);
            println!(
                "{} preset {}, plan {:?}, canvas {}",
                "Spec:".dimmed(),
                spec.preset_name(),
                spec.plan_kind(),
                spec.canvas_size
            );
            print_params(&params);
            println!("\n{} Spec is valid", "SUCCESS".green().bold());
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => report_failure(source, error, json_output),
    }
}

/// Validate `spec` and resolve its parameters with the generation stream.
///
/// The resolved values are the ones `generate` would use for the same seed.
pub fn check(spec: &CharacterSpec) -> std::result::Result<ResolvedParams, JsonError> {
    spec.validate()
        .map_err(|e| JsonError::new(e.code(), e.to_string()))?;
    let mut rng = DeterministicRng::for_stream(spec.seed, RESOLVE_STREAM);
    let (params, _) = resolve_body(&spec.ranges(), &mut rng)
        .map_err(|e| JsonError::new(error_codes::INVALID_SPEC, e.to_string()))?;
    Ok(params)
}

fn report_failure(source: &str, error: JsonError, json_output: bool) -> Result<ExitCode> {
    if json_output {
        print_json(&ValidateOutput::failure(error))?;
    } else {
        println!("{} {}", "Validating:".cyan().bold(), source);
        println!("  {} [{}]: {}", "x".red(), error.code, error.message);
        println!("\n{} Spec is invalid", "FAILED".red().bold());
    }
    Ok(ExitCode::from(1))
}

fn print_params(params: &ResolvedParams) {
    for (name, value) in params.iter() {
        let text = match value {
            ResolvedValue::Number(n) => format!("{:.2}", n),
            ResolvedValue::Flag(b) => b.to_string(),
            ResolvedValue::Text(s) => s.clone(),
        };
        println!("  {:<24} {}", name.dimmed(), text);
    }
}
