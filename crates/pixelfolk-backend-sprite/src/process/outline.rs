//! Silhouette outline.

use pixelfolk_spec::ProcessOptions;

use crate::color::Rgb;
use crate::grid::{PixelGrid, ORTHOGONAL_OFFSETS};

/// Paint every empty cell that touches a filled cell orthogonally with the
/// outline color. Filled cells are never overwritten and new outline cells do
/// not spawn further outline in the same pass.
pub fn apply_outline(grid: &PixelGrid, options: &ProcessOptions) -> PixelGrid {
    let color = Rgb::from(options.outline_color);
    let candidates: Vec<(u32, u32)> = grid
        .cells()
        .filter(|&(x, y, cell)| {
            cell.is_none()
                && ORTHOGONAL_OFFSETS
                    .iter()
                    .any(|&(dx, dy)| grid.is_filled_checked(x as i32 + dx, y as i32 + dy))
        })
        .map(|(x, y, _)| (x, y))
        .collect();

    let mut out = grid.clone();
    for (x, y) in candidates {
        out.fill(x, y, color);
    }
    out
}
