//! Palette colors.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// A palette entry, either `"#rrggbb"` or `[r, g, b]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PaletteColor {
    Hex(String),
    Rgb([u8; 3]),
}

impl PaletteColor {
    /// Returns the color as an RGB triple.
    pub fn to_rgb(&self) -> Result<[u8; 3], SpecError> {
        match self {
            PaletteColor::Rgb(rgb) => Ok(*rgb),
            PaletteColor::Hex(s) => parse_hex(s),
        }
    }
}

fn parse_hex(s: &str) -> Result<[u8; 3], SpecError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(SpecError::InvalidColor(s.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| SpecError::InvalidColor(s.to_string()))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// Ordered list of colors used by the pixel fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    pub colors: Vec<PaletteColor>,
}

impl Palette {
    pub fn from_rgb(colors: impl IntoIterator<Item = [u8; 3]>) -> Self {
        Self {
            colors: colors.into_iter().map(PaletteColor::Rgb).collect(),
        }
    }

    /// Resolves every entry, rejecting empty palettes and malformed hex strings.
    pub fn to_rgb(&self) -> Result<Vec<[u8; 3]>, SpecError> {
        if self.colors.is_empty() {
            return Err(SpecError::EmptyPalette);
        }
        self.colors.iter().map(PaletteColor::to_rgb).collect()
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    /// Small earthy palette; real palette tables are supplied by callers.
    fn default() -> Self {
        Palette::from_rgb([
            [0xe0, 0xb0, 0x8a],
            [0x4a, 0x6f, 0xa5],
            [0x3b, 0x3b, 0x58],
            [0x5c, 0x3a, 0x21],
            [0x9c, 0x5b, 0x3b],
        ])
    }
}
