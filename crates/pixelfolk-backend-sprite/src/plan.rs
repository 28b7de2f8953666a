//! Body plans: parameter ranges plus region tagging and palette policy.
//!
//! A plan is plain data handed to the single generic pipeline; archetypes differ
//! only in the plan they supply.

use pixelfolk_spec::{CharacterSpec, ParameterSet, PlanKind};

use crate::color::Rgb;
use crate::rng::DeterministicRng;
use crate::skeleton::BodyPart;

/// Coloring region a body part belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Skin,
    Shirt,
    Pants,
    Shoes,
}

impl Region {
    /// Palette slot this region draws from (wrapped to the palette length).
    pub fn palette_slot(&self) -> usize {
        match self {
            Region::Skin => 0,
            Region::Shirt => 1,
            Region::Pants => 2,
            Region::Shoes => 3,
        }
    }
}

/// How filled pixels pick their color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PalettePolicy {
    /// Uniformly random palette entry per pixel.
    Uniform,
    /// The palette slot of the owning part's region; untagged parts fall back
    /// to a uniform pick.
    ByRegion,
}

/// Everything that distinguishes one character archetype from another.
#[derive(Debug, Clone)]
pub struct BodyPlan {
    pub name: &'static str,
    pub ranges: ParameterSet,
    pub region_of: fn(BodyPart) -> Option<Region>,
    pub palette_policy: PalettePolicy,
}

impl BodyPlan {
    /// Uniform coloring, no regions.
    pub fn generic(ranges: ParameterSet) -> Self {
        Self {
            name: "generic",
            ranges,
            region_of: no_region,
            palette_policy: PalettePolicy::Uniform,
        }
    }

    /// Skin, shirt, pants, and shoes colored from fixed palette slots.
    pub fn human(ranges: ParameterSet) -> Self {
        Self {
            name: "human",
            ranges,
            region_of: human_region,
            palette_policy: PalettePolicy::ByRegion,
        }
    }

    /// Plan selected by a character spec, with the spec's merged ranges.
    pub fn from_spec(spec: &CharacterSpec) -> Self {
        match spec.plan_kind() {
            PlanKind::Generic => Self::generic(spec.ranges()),
            PlanKind::Human => Self::human(spec.ranges()),
        }
    }

    pub fn region(&self, part: BodyPart) -> Option<Region> {
        (self.region_of)(part)
    }

    /// Color for a newly filled pixel owned by `owner`. `palette` must be non-empty.
    pub fn pick_color(
        &self,
        owner: Option<BodyPart>,
        palette: &[Rgb],
        rng: &mut DeterministicRng,
    ) -> Rgb {
        let region = match self.palette_policy {
            PalettePolicy::Uniform => None,
            PalettePolicy::ByRegion => owner.and_then(|part| self.region(part)),
        };
        match region {
            Some(region) => palette[region.palette_slot() % palette.len()],
            None => palette[rng.gen_index(palette.len())],
        }
    }
}

fn no_region(_: BodyPart) -> Option<Region> {
    None
}

fn human_region(part: BodyPart) -> Option<Region> {
    use BodyPart::*;
    Some(match part {
        Head | Neck | LeftHand | RightHand => Region::Skin,
        Torso | LeftUpperArm | RightUpperArm | LeftForearm | RightForearm | LeftShoulder
        | RightShoulder | LeftElbow | RightElbow => Region::Shirt,
        LeftThigh | RightThigh | LeftShin | RightShin | LeftKnee | RightKnee => Region::Pants,
        LeftFoot | RightFoot => Region::Shoes,
    })
}
