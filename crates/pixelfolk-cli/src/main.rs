//! Pixelfolk CLI - Command-line interface for procedural pixel characters
//!
//! This binary generates characters from JSON specs or presets, validates
//! specs, lists presets, and renders animated previews.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::process::ExitCode;

use pixelfolk_cli::commands;
use pixelfolk_cli::commands::generate::GenerateArgs;
use pixelfolk_cli::commands::preview::PreviewArgs;
use pixelfolk_cli::input::{ProcessArgs, SpecArgs};
use pixelfolk_cli::logging;

/// Pixelfolk - Procedural Pixel Character Generator
#[derive(Parser)]
#[command(name = "pixelfolk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Where the spec comes from
#[derive(Args, Debug)]
struct SpecFlags {
    /// Path to a JSON character spec (defaults apply when omitted)
    #[arg(short, long)]
    spec: Option<String>,

    /// Body preset (standard, short, tall, thin, bulky, human)
    #[arg(short, long)]
    preset: Option<String>,

    /// RNG seed, overriding the spec's
    #[arg(long)]
    seed: Option<u32>,

    /// Canvas edge length in cells, overriding the spec's
    #[arg(long)]
    size: Option<u32>,
}

/// Post-processing toggles
#[derive(Args, Debug)]
struct ProcessFlags {
    /// Disable smoothing
    #[arg(long)]
    no_smoothing: bool,

    /// Disable the outline
    #[arg(long)]
    no_outline: bool,

    /// Light direction (top-left, top-right, bottom-left, bottom-right, none)
    #[arg(long)]
    light: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate characters and write PNGs
    Generate {
        #[command(flatten)]
        spec: SpecFlags,

        #[command(flatten)]
        process: ProcessFlags,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        out_dir: String,

        /// Output pixels per grid cell
        #[arg(long, default_value_t = 8)]
        scale: u32,

        /// Number of characters, with consecutive seeds
        #[arg(short = 'n', long, default_value_t = 1)]
        count: u32,

        /// Also write an animation strip (regenerate, head-bob, stretch)
        #[arg(long)]
        frames: Option<String>,

        /// Also write the grid before post-processing
        #[arg(long)]
        raw: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a spec and show its resolved parameters
    Validate {
        #[command(flatten)]
        spec: SpecFlags,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List body presets
    Presets {
        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render an animated GIF preview of one character
    Preview {
        #[command(flatten)]
        spec: SpecFlags,

        #[command(flatten)]
        process: ProcessFlags,

        /// Animation style (regenerate, head-bob, stretch)
        #[arg(long)]
        style: Option<String>,

        /// Output GIF path
        #[arg(short, long, default_value = "preview.gif")]
        out: String,

        /// Frames per second
        #[arg(long, default_value_t = 4)]
        fps: u32,

        /// Output pixels per grid cell
        #[arg(long, default_value_t = 8)]
        scale: u32,
    },
}

impl From<SpecFlags> for SpecArgs {
    fn from(flags: SpecFlags) -> Self {
        SpecArgs {
            spec: flags.spec,
            preset: flags.preset,
            seed: flags.seed,
            canvas_size: flags.size,
        }
    }
}

impl From<ProcessFlags> for ProcessArgs {
    fn from(flags: ProcessFlags) -> Self {
        ProcessArgs {
            no_smoothing: flags.no_smoothing,
            no_outline: flags.no_outline,
            light: flags.light,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            spec,
            process,
            out_dir,
            scale,
            count,
            frames,
            raw,
            json,
        } => commands::generate::run(&GenerateArgs {
            spec: spec.into(),
            process: process.into(),
            out_dir,
            scale,
            count,
            frames,
            raw,
            json,
        }),
        Commands::Validate { spec, json } => commands::validate::run(&spec.into(), json),
        Commands::Presets { json } => commands::presets::run(json),
        Commands::Preview {
            spec,
            process,
            style,
            out,
            fps,
            scale,
        } => commands::preview::run(&PreviewArgs {
            spec: spec.into(),
            process: process.into(),
            style,
            out,
            fps,
            scale,
        }),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
