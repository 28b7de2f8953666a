//! Generate command implementation
//!
//! Generates one or more characters and writes their PNGs.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use pixelfolk_backend_sprite::png::{write_grid, write_strip};
use pixelfolk_backend_sprite::{generate_character, Character, PngConfig};
use pixelfolk_spec::{AnimationStyle, BackendError, CharacterSpec};

use super::json_output::{error_codes, print_json, CharacterSummary, GenerateOutput, JsonError};
use crate::input::{build_spec, output_stem, parse_style, ProcessArgs, SpecArgs};

/// Options for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    pub spec: SpecArgs,
    pub process: ProcessArgs,
    pub out_dir: String,
    /// Output pixels per grid cell
    pub scale: u32,
    /// Number of characters; seeds run `seed, seed + 1, ...`
    pub count: u32,
    /// Animation style for a frame strip, overriding the spec's
    pub frames: Option<String>,
    /// Also write the unprocessed grid
    pub raw: bool,
    pub json: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            spec: SpecArgs::default(),
            process: ProcessArgs::default(),
            out_dir: ".".to_string(),
            scale: 8,
            count: 1,
            frames: None,
            raw: false,
            json: false,
        }
    }
}

/// Run the generate command
///
/// # Returns
/// Exit code: 0 if every character was written, 1 otherwise
pub fn run(args: &GenerateArgs) -> Result<ExitCode> {
    if args.count == 0 {
        bail!("--count must be at least 1");
    }

    let (spec, style) = match prepare(args) {
        Ok(prepared) => prepared,
        Err(e) if args.json => {
            let output = GenerateOutput {
                success: false,
                characters: Vec::new(),
                errors: vec![JsonError::new(error_codes::SPEC_LOAD, format!("{:#}", e))],
            };
            print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
        Err(e) => return Err(e),
    };

    let out_dir = Path::new(&args.out_dir);
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let start = Instant::now();
    if !args.json {
        println!(
            "{} {} character(s), preset {}, seed {}",
            "Generating:".cyan().bold(),
            args.count,
            spec.preset_name(),
            spec.seed
        );
    }

    let config = PngConfig::default().with_scale(args.scale);
    let mut characters = Vec::new();
    let mut errors = Vec::new();

    for i in 0..args.count {
        let mut item = spec.clone();
        item.seed = spec.seed.wrapping_add(i);
        match generate_one(&item, style, out_dir, &config, args.raw) {
            Ok(summary) => {
                if !args.json {
                    print_summary(&summary);
                }
                characters.push(summary);
            }
            Err(error) => {
                if !args.json {
                    println!(
                        "  {} seed {}: {}",
                        "x".red(),
                        item.seed,
                        error.message
                    );
                }
                errors.push(error.with_seed(item.seed));
            }
        }
    }

    let duration_ms = start.elapsed().as_millis() as u64;
    let success = errors.is_empty();

    if args.json {
        print_json(&GenerateOutput {
            success,
            characters,
            errors,
        })?;
    } else if success {
        println!(
            "\n{} Generated {} character(s) in {} ({}ms)",
            "SUCCESS".green().bold(),
            characters.len(),
            out_dir.display(),
            duration_ms
        );
    } else {
        println!(
            "\n{} {} of {} character(s) failed ({}ms)",
            "FAILED".red().bold(),
            errors.len(),
            args.count,
            duration_ms
        );
    }

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn prepare(args: &GenerateArgs) -> Result<(CharacterSpec, Option<AnimationStyle>)> {
    let mut spec = build_spec(&args.spec)?;
    args.process.apply(&mut spec.process)?;
    let style = match &args.frames {
        Some(name) => Some(parse_style(name)?),
        None => spec.animation,
    };
    Ok((spec, style))
}

fn generate_one(
    spec: &CharacterSpec,
    style: Option<AnimationStyle>,
    out_dir: &Path,
    config: &PngConfig,
    raw: bool,
) -> std::result::Result<CharacterSummary, JsonError> {
    let character = generate_character(spec).map_err(|e| JsonError::new(e.code(), e.message()))?;
    let stem = output_stem(spec);

    let png_path = out_dir.join(format!("{}.png", stem));
    let png_hash = write_grid(character.pixels(), &png_path, config).map_err(write_error)?;
    let mut summary = CharacterSummary::new(
        &character,
        spec.preset_name(),
        display(&png_path),
        png_hash,
    );

    if raw {
        let raw_path = out_dir.join(format!("{}_raw.png", stem));
        write_grid(character.raw_pixels(), &raw_path, config).map_err(write_error)?;
        summary.raw_png = Some(display(&raw_path));
    }

    if let Some(style) = style {
        summary.frames_png = Some(write_frames(&character, style, out_dir, &stem, config)?);
    }

    Ok(summary)
}

fn write_frames(
    character: &Character,
    style: AnimationStyle,
    out_dir: &Path,
    stem: &str,
    config: &PngConfig,
) -> std::result::Result<String, JsonError> {
    let frames = character.animate(style);
    let path = out_dir.join(format!("{}_{}.png", stem, style.as_str()));
    write_strip(&frames.frames, &path, config).map_err(write_error)?;
    log::info!("{} frames -> {}", frames.len(), path.display());
    Ok(display(&path))
}

fn write_error(e: pixelfolk_backend_sprite::PngError) -> JsonError {
    JsonError::new(error_codes::WRITE_ERROR, e.to_string())
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

fn print_summary(summary: &CharacterSummary) {
    println!(
        "  {} {} ({} cells, {} raw) {}",
        "+".green(),
        summary.png,
        summary.filled,
        summary.raw_filled,
        summary.png_hash[..16].dimmed()
    );
    for extra in summary.raw_png.iter().chain(summary.frames_png.iter()) {
        println!("  {} {}", "+".green(), extra);
    }
}
