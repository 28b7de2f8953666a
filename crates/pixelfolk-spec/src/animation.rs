//! Idle animation styles.

use serde::{Deserialize, Serialize};

/// How idle animation frames are derived from a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimationStyle {
    /// Three frames regenerated with torso height and arm angle perturbed by
    /// -5%, 0 and +5%.
    #[default]
    Regenerate,
    /// Two frames: rest, then a +5% breath with the rest frame's head pasted
    /// back one row higher.
    HeadBob,
    /// Three frames: the upper half shifted down one row, rest, and shifted
    /// up one row. No geometry is recomputed.
    Stretch,
}

impl AnimationStyle {
    pub const ALL: [AnimationStyle; 3] = [
        AnimationStyle::Regenerate,
        AnimationStyle::HeadBob,
        AnimationStyle::Stretch,
    ];

    /// Number of frames produced by this style.
    pub fn frame_count(&self) -> usize {
        match self {
            AnimationStyle::HeadBob => 2,
            AnimationStyle::Regenerate | AnimationStyle::Stretch => 3,
        }
    }

    /// Per-frame step in `-1..=1`; step 0 is the rest frame.
    pub fn steps(&self) -> &'static [i32] {
        match self {
            AnimationStyle::HeadBob => &[0, 1],
            AnimationStyle::Regenerate | AnimationStyle::Stretch => &[-1, 0, 1],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationStyle::Regenerate => "regenerate",
            AnimationStyle::HeadBob => "head_bob",
            AnimationStyle::Stretch => "stretch",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "regenerate" => Some(AnimationStyle::Regenerate),
            "head_bob" => Some(AnimationStyle::HeadBob),
            "stretch" => Some(AnimationStyle::Stretch),
            _ => None,
        }
    }
}
