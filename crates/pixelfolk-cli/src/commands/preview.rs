//! Preview command implementation
//!
//! Renders an animation style as a looping GIF, played ping-pong.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use gif::{DisposalMethod, Encoder, Frame, Repeat};

use pixelfolk_backend_sprite::{generate_character, PixelGrid, RgbaImage};

use crate::input::{build_spec, parse_style, ProcessArgs, SpecArgs};

/// Speed passed to the GIF quantizer; 10 is the crate's recommended balance.
const QUANTIZE_SPEED: i32 = 10;

/// Options for the preview command.
#[derive(Debug, Clone)]
pub struct PreviewArgs {
    pub spec: SpecArgs,
    pub process: ProcessArgs,
    /// Animation style name; defaults to the spec's, then `regenerate`
    pub style: Option<String>,
    pub out: String,
    pub fps: u32,
    pub scale: u32,
}

impl Default for PreviewArgs {
    fn default() -> Self {
        Self {
            spec: SpecArgs::default(),
            process: ProcessArgs::default(),
            style: None,
            out: "preview.gif".to_string(),
            fps: 4,
            scale: 8,
        }
    }
}

/// Run the preview command
pub fn run(args: &PreviewArgs) -> Result<ExitCode> {
    if args.fps == 0 || args.fps > 100 {
        bail!("--fps must be between 1 and 100, got {}", args.fps);
    }

    let mut spec = build_spec(&args.spec)?;
    args.process.apply(&mut spec.process)?;
    let style = match &args.style {
        Some(name) => parse_style(name)?,
        None => spec.animation.unwrap_or_default(),
    };

    let character = generate_character(&spec)
        .with_context(|| format!("Failed to generate character for seed {}", spec.seed))?;
    let anim = character.animate(style);
    let order = anim.ping_pong();

    let path = Path::new(&args.out);
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    encode_gif(&order, args.scale, args.fps, &mut writer)
        .with_context(|| format!("Failed to encode {}", path.display()))?;
    writer.flush()?;

    println!(
        "{} {} ({} frames, {} style, {} fps)",
        "Wrote".green().bold(),
        path.display(),
        order.len(),
        style.as_str(),
        args.fps
    );
    Ok(ExitCode::SUCCESS)
}

/// Encode `frames` as an infinitely looping GIF.
pub fn encode_gif<W: Write>(frames: &[&PixelGrid], scale: u32, fps: u32, writer: W) -> Result<()> {
    let Some(first) = frames.first() else {
        bail!("no frames to encode");
    };
    let side = first.size() * scale;
    let side = u16::try_from(side).with_context(|| format!("GIF too large: {} pixels", side))?;
    let delay = u16::try_from(100 / fps.max(1)).unwrap_or(u16::MAX);

    let mut encoder = Encoder::new(writer, side, side, &[])?;
    encoder.set_repeat(Repeat::Infinite)?;
    for grid in frames {
        let mut image = RgbaImage::from_grid(grid, scale)?;
        let mut frame = Frame::from_rgba_speed(side, side, &mut image.data, QUANTIZE_SPEED);
        frame.delay = delay;
        // transparent cells must not show the previous frame
        frame.dispose = DisposalMethod::Background;
        encoder.write_frame(&frame)?;
    }
    Ok(())
}
