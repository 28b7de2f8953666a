//! Post-processing toggles.

use serde::{Deserialize, Serialize};

/// Near-black outline color used when none is configured.
pub const DEFAULT_OUTLINE_COLOR: [u8; 3] = [20, 20, 20];

/// Corner the light comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightDirection {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl LightDirection {
    /// Unit grid offsets `(dx, dy)` pointing toward the light, vertical first.
    pub fn toward(&self) -> [(i32, i32); 2] {
        match self {
            LightDirection::TopLeft => [(0, -1), (-1, 0)],
            LightDirection::TopRight => [(0, -1), (1, 0)],
            LightDirection::BottomLeft => [(0, 1), (-1, 0)],
            LightDirection::BottomRight => [(0, 1), (1, 0)],
        }
    }

    /// Unit grid offsets pointing away from the light.
    pub fn away(&self) -> [(i32, i32); 2] {
        let [(ax, ay), (bx, by)] = self.toward();
        [(-ax, -ay), (-bx, -by)]
    }

    /// Parses `top-left`, `top_right`, etc.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "top_left" => Some(LightDirection::TopLeft),
            "top_right" => Some(LightDirection::TopRight),
            "bottom_left" => Some(LightDirection::BottomLeft),
            "bottom_right" => Some(LightDirection::BottomRight),
            _ => None,
        }
    }
}

/// Which post-processors run, and how.
///
/// Changing any of these only requires reprocessing the retained raw grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessOptions {
    pub enable_smoothing: bool,
    pub show_outline: bool,
    pub outline_color: [u8; 3],
    /// `None` disables lighting.
    pub light_direction: Option<LightDirection>,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            enable_smoothing: true,
            show_outline: true,
            outline_color: DEFAULT_OUTLINE_COLOR,
            light_direction: Some(LightDirection::default()),
        }
    }
}

impl ProcessOptions {
    /// Options with every post-processor disabled.
    pub fn none() -> Self {
        Self {
            enable_smoothing: false,
            show_outline: false,
            outline_color: DEFAULT_OUTLINE_COLOR,
            light_direction: None,
        }
    }
}
