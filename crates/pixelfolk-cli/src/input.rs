//! Spec loading and command-line overrides.

use std::path::Path;

use anyhow::{bail, Context, Result};
use pixelfolk_spec::{AnimationStyle, BodyPreset, CharacterSpec, LightDirection, ProcessOptions};

/// Where a character spec comes from, plus flags layered on top.
#[derive(Debug, Clone, Default)]
pub struct SpecArgs {
    /// JSON spec file; defaults apply when absent.
    pub spec: Option<String>,
    pub preset: Option<String>,
    pub seed: Option<u32>,
    pub canvas_size: Option<u32>,
}

/// Post-processing flags.
#[derive(Debug, Clone, Default)]
pub struct ProcessArgs {
    pub no_smoothing: bool,
    pub no_outline: bool,
    /// A light direction name, or `none` to disable lighting.
    pub light: Option<String>,
}

/// Read and parse a JSON character spec.
pub fn load_spec(path: &Path) -> Result<CharacterSpec> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read spec file: {}", path.display()))?;
    CharacterSpec::from_json(&text)
        .with_context(|| format!("Failed to parse spec file: {}", path.display()))
}

/// Build the spec for a command: the file (or defaults), then flag overrides.
pub fn build_spec(args: &SpecArgs) -> Result<CharacterSpec> {
    let mut spec = match &args.spec {
        Some(path) => load_spec(Path::new(path))?,
        None => CharacterSpec::new(0),
    };
    if let Some(name) = &args.preset {
        let preset = BodyPreset::from_name(name);
        if preset.as_str() != name.trim().to_ascii_lowercase() {
            log::warn!("unknown preset '{}', using {}", name, preset.as_str());
        }
        spec = spec.with_preset(preset);
    }
    if let Some(seed) = args.seed {
        spec.seed = seed;
    }
    if let Some(size) = args.canvas_size {
        spec.canvas_size = size;
    }
    Ok(spec)
}

impl ProcessArgs {
    /// Apply the flags to `options`.
    pub fn apply(&self, options: &mut ProcessOptions) -> Result<()> {
        if self.no_smoothing {
            options.enable_smoothing = false;
        }
        if self.no_outline {
            options.show_outline = false;
        }
        if let Some(name) = &self.light {
            options.light_direction = parse_light(name)?;
        }
        Ok(())
    }
}

/// Parse a light direction name; `none` disables lighting.
pub fn parse_light(name: &str) -> Result<Option<LightDirection>> {
    if name.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    match LightDirection::from_name(name) {
        Some(direction) => Ok(Some(direction)),
        None => bail!(
            "unknown light direction: {} (expected top-left, top-right, bottom-left, bottom-right, or none)",
            name
        ),
    }
}

/// Parse an animation style name.
pub fn parse_style(name: &str) -> Result<AnimationStyle> {
    AnimationStyle::from_name(name).with_context(|| {
        format!(
            "unknown animation style: {} (expected regenerate, head-bob, or stretch)",
            name
        )
    })
}

/// File stem for a generated character: its name, or `character`, plus the seed.
pub fn output_stem(spec: &CharacterSpec) -> String {
    let base: String = spec
        .name
        .as_deref()
        .unwrap_or("character")
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c.to_ascii_lowercase() } else { '_' })
        .collect();
    format!("{}_{}", base, spec.seed)
}
