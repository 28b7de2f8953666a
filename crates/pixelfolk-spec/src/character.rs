//! Top-level character document.

use serde::{Deserialize, Serialize};

use crate::animation::AnimationStyle;
use crate::error::SpecError;
use crate::palette::Palette;
use crate::params::ParameterSet;
use crate::preset::BodyPreset;
use crate::process::ProcessOptions;

/// Default canvas edge length in cells.
pub const DEFAULT_CANVAS_SIZE: u32 = 50;
/// Smallest accepted canvas. Tiny canvases degrade quality but never crash.
pub const MIN_CANVAS_SIZE: u32 = 8;
/// Largest accepted canvas.
pub const MAX_CANVAS_SIZE: u32 = 512;

/// Which body plan drives coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    /// Every pixel picks a uniformly random palette color.
    Generic,
    /// Pixels are colored by the body region that owns them.
    Human,
}

/// Everything needed to generate one character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharacterSpec {
    /// Display name, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// RNG seed for the whole character.
    pub seed: u32,

    /// Canvas edge length in cells.
    #[serde(default = "default_canvas_size")]
    pub canvas_size: u32,

    /// Preset name; unknown names fall back to `standard`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Body plan. Defaults to `human` for the human preset, `generic` otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<PlanKind>,

    /// Per-attribute overrides layered on the preset's ranges.
    #[serde(default, skip_serializing_if = "ParameterSet::is_empty")]
    pub params: ParameterSet,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Palette>,

    #[serde(default)]
    pub process: ProcessOptions,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationStyle>,
}

fn default_canvas_size() -> u32 {
    DEFAULT_CANVAS_SIZE
}

impl CharacterSpec {
    /// Creates a spec with defaults for everything but the seed.
    pub fn new(seed: u32) -> Self {
        Self {
            name: None,
            seed,
            canvas_size: DEFAULT_CANVAS_SIZE,
            preset: None,
            plan: None,
            params: ParameterSet::new(),
            palette: None,
            process: ProcessOptions::default(),
            animation: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_preset(mut self, preset: BodyPreset) -> Self {
        self.preset = Some(preset.as_str().to_string());
        self
    }

    pub fn with_canvas_size(mut self, size: u32) -> Self {
        self.canvas_size = size;
        self
    }

    pub fn with_params(mut self, params: ParameterSet) -> Self {
        self.params = params;
        self
    }

    pub fn preset_name(&self) -> &str {
        self.preset.as_deref().unwrap_or("standard")
    }

    pub fn body_preset(&self) -> BodyPreset {
        BodyPreset::from_name(self.preset_name())
    }

    pub fn plan_kind(&self) -> PlanKind {
        self.plan.unwrap_or(match self.body_preset() {
            BodyPreset::Human => PlanKind::Human,
            _ => PlanKind::Generic,
        })
    }

    /// The preset's range table with this spec's overrides applied.
    pub fn ranges(&self) -> ParameterSet {
        self.body_preset().ranges().merged(&self.params)
    }

    /// Checks canvas size, ranges, and palette.
    pub fn validate(&self) -> Result<(), SpecError> {
        if !(MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE).contains(&self.canvas_size) {
            return Err(SpecError::CanvasSize {
                size: self.canvas_size,
                min: MIN_CANVAS_SIZE,
                max: MAX_CANVAS_SIZE,
            });
        }
        self.ranges().validate()?;
        if let Some(palette) = &self.palette {
            palette.to_rgb()?;
        }
        Ok(())
    }
}
