//! Directional edge lighting.

use pixelfolk_spec::{LightDirection, ProcessOptions};

use crate::grid::PixelGrid;

/// Fraction each exposed edge moves a color toward white or black.
pub const LIGHT_AMOUNT: f64 = 0.2;

/// Tint filled cells whose light-facing neighbors are empty and shade those
/// whose far-side neighbors are empty.
///
/// Off-canvas neighbors count as empty, so a corner cell can be lit and shaded
/// at once. Lookups always read `grid`; results go to a fresh buffer. Without
/// a light direction the grid is returned unchanged.
pub fn apply_lighting(grid: &PixelGrid, options: &ProcessOptions) -> PixelGrid {
    let Some(direction) = options.light_direction else {
        return grid.clone();
    };
    light(grid, direction)
}

fn light(grid: &PixelGrid, direction: LightDirection) -> PixelGrid {
    let toward = direction.toward();
    let away = direction.away();
    let mut out = PixelGrid::new(grid.size());

    for (x, y, cell) in grid.cells() {
        let Some(mut color) = cell else {
            continue;
        };
        let exposed = |(dx, dy): (i32, i32)| !grid.is_filled_checked(x as i32 + dx, y as i32 + dy);
        for offset in toward {
            if exposed(offset) {
                color = color.tint(LIGHT_AMOUNT);
            }
        }
        for offset in away {
            if exposed(offset) {
                color = color.shade(LIGHT_AMOUNT);
            }
        }
        out.fill(x, y, color);
    }
    out
}
