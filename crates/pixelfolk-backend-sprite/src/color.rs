//! Color utilities for pixel grids.

use std::fmt;

/// 8-bit RGB color. Equality is exact, which the post-processors rely on when
/// counting neighbor colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Create white.
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Linearly interpolate toward `other` by `t` in [0, 1].
    pub fn lerp(&self, other: &Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    /// Move `amount` of the way toward white.
    pub fn tint(&self, amount: f64) -> Rgb {
        self.lerp(&Rgb::white(), amount)
    }

    /// Move `amount` of the way toward black.
    pub fn shade(&self, amount: f64) -> Rgb {
        self.lerp(&Rgb::black(), amount)
    }

    /// Convert to 8-bit RGBA with full opacity.
    pub fn to_rgba8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Perceived brightness in [0, 1].
    pub fn luminance(&self) -> f64 {
        (0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64) / 255.0
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tint_moves_twenty_percent_to_white() {
        let c = Rgb::new(100, 0, 255);
        assert_eq!(c.tint(0.2), Rgb::new(131, 51, 255));
    }

    #[test]
    fn test_shade_moves_twenty_percent_to_black() {
        let c = Rgb::new(100, 50, 255);
        assert_eq!(c.shade(0.2), Rgb::new(80, 40, 204));
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Rgb::new(10, 20, 30);
        let b = Rgb::new(200, 100, 0);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn test_display_hex() {
        assert_eq!(Rgb::new(255, 128, 1).to_string(), "#ff8001");
    }
}
