//! The character aggregate and the end-to-end generation pass.

use log::{debug, info};
use thiserror::Error;

use pixelfolk_spec::{
    AnimationStyle, BackendError, BodyParams, CharacterSpec, ProcessOptions, ResolvedParams,
    SpecError, MAX_CANVAS_SIZE, MIN_CANVAS_SIZE,
};

use crate::animation::{derive_frames, AnimationFrames};
use crate::color::Rgb;
use crate::fill::{fill_pixels, remove_isolated_pixels};
use crate::grid::PixelGrid;
use crate::heatmap::{generate_heatmap, OccupancyField};
use crate::plan::BodyPlan;
use crate::process::process;
use crate::resolve::{resolve_body, ResolveError};
use crate::rng::DeterministicRng;
use crate::skeleton::{build_skeleton, Skeleton};

/// Sub-stream label for parameter sampling.
pub const RESOLVE_STREAM: &str = "resolve";
/// Sub-stream label for the stochastic fill.
pub const FILL_STREAM: &str = "fill";

/// Errors from character generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("invalid spec: {0}")]
    Spec(#[from] SpecError),

    #[error("parameter resolution failed: {0}")]
    Resolve(#[from] ResolveError),
}

impl BackendError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::Spec(_) => "SPRITE_001",
            GenerateError::Resolve(_) => "SPRITE_002",
        }
    }

    fn category(&self) -> &'static str {
        "sprite"
    }
}

/// A generated character.
///
/// `raw_pixels` is the grid right after fill and isolated-pixel removal;
/// `pixels` is always `raw_pixels` run through the current options.
#[derive(Debug, Clone)]
pub struct Character {
    pub seed: u32,
    pub name: Option<String>,
    pub canvas_size: u32,
    pub params: ResolvedParams,
    pub body: BodyParams,
    pub skeleton: Skeleton,
    pub heatmap: OccupancyField,
    pub palette: Vec<Rgb>,
    plan: BodyPlan,
    options: ProcessOptions,
    raw_pixels: PixelGrid,
    pixels: PixelGrid,
}

/// Generate a character from a spec document.
pub fn generate_character(spec: &CharacterSpec) -> Result<Character, GenerateError> {
    spec.validate()?;
    let palette: Vec<Rgb> = spec
        .palette
        .clone()
        .unwrap_or_default()
        .to_rgb()?
        .into_iter()
        .map(Rgb::from)
        .collect();

    let mut character = Character::generate(
        spec.seed,
        spec.canvas_size,
        BodyPlan::from_spec(spec),
        palette,
        spec.process.clone(),
    )?;
    character.name = spec.name.clone();
    Ok(character)
}

impl Character {
    /// Run resolve, build, rasterize, fill, and post-process once.
    pub fn generate(
        seed: u32,
        canvas_size: u32,
        plan: BodyPlan,
        palette: Vec<Rgb>,
        options: ProcessOptions,
    ) -> Result<Self, GenerateError> {
        if !(MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE).contains(&canvas_size) {
            return Err(SpecError::CanvasSize {
                size: canvas_size,
                min: MIN_CANVAS_SIZE,
                max: MAX_CANVAS_SIZE,
            }
            .into());
        }
        if palette.is_empty() {
            return Err(SpecError::EmptyPalette.into());
        }

        let mut rng = DeterministicRng::for_stream(seed, RESOLVE_STREAM);
        let (params, body) = resolve_body(&plan.ranges, &mut rng)?;
        let skeleton = build_skeleton(&body, canvas_size);
        let heatmap = generate_heatmap(&skeleton, canvas_size);
        let raw_pixels = rasterize(&heatmap, &body, &palette, &plan, seed);
        let pixels = process(&raw_pixels, &options);

        info!(
            "generated character seed={} plan={} size={} filled={}",
            seed,
            plan.name,
            canvas_size,
            pixels.filled_count()
        );

        Ok(Self {
            seed,
            name: None,
            canvas_size,
            params,
            body,
            skeleton,
            heatmap,
            palette,
            plan,
            options,
            raw_pixels,
            pixels,
        })
    }

    /// The grid before smoothing, lighting, and outline.
    pub fn raw_pixels(&self) -> &PixelGrid {
        &self.raw_pixels
    }

    /// The post-processed grid.
    pub fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }

    pub fn options(&self) -> &ProcessOptions {
        &self.options
    }

    pub fn plan(&self) -> &BodyPlan {
        &self.plan
    }

    /// Re-run post-processing from the raw grid with new options.
    ///
    /// Geometry, occupancy, and fill are untouched.
    pub fn reprocess(&mut self, options: ProcessOptions) {
        self.pixels = process(&self.raw_pixels, &options);
        self.options = options;
        debug!("reprocessed seed={}", self.seed);
    }

    /// Derive animation frames; the rest frame equals [`Character::pixels`].
    pub fn animate(&self, style: AnimationStyle) -> AnimationFrames {
        derive_frames(self, style)
    }
}

/// Fill plus isolated-pixel removal, always from the character's fill stream.
pub(crate) fn rasterize(
    heatmap: &OccupancyField,
    body: &BodyParams,
    palette: &[Rgb],
    plan: &BodyPlan,
    seed: u32,
) -> PixelGrid {
    let mut rng = DeterministicRng::for_stream(seed, FILL_STREAM);
    let filled = fill_pixels(heatmap, body.fill_density, palette, plan, &mut rng);
    remove_isolated_pixels(&filled)
}
