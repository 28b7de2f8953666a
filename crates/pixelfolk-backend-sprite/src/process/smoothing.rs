//! Single-pass cellular-automaton smoothing.

use pixelfolk_spec::ProcessOptions;

use crate::color::Rgb;
use crate::grid::{PixelGrid, MOORE_OFFSETS};

/// An empty cell needs more than this many filled Moore neighbors to be filled.
pub const SMOOTHING_MIN_NEIGHBORS: usize = 4;

/// Fill every empty cell that has more than [`SMOOTHING_MIN_NEIGHBORS`] filled
/// neighbors with the most frequent neighbor color.
///
/// Ties go to the color seen first in neighbor order: row-major, with each row
/// read right to left for cells right of the center line. The reflected order
/// keeps mirror-symmetric input symmetric. Candidates are computed from the
/// input grid only.
pub fn apply_smoothing(grid: &PixelGrid, _options: &ProcessOptions) -> PixelGrid {
    let to_fill: Vec<(u32, u32, Rgb)> = grid
        .cells()
        .filter(|&(_, _, cell)| cell.is_none())
        .filter_map(|(x, y, _)| dominant_neighbor(grid, x, y).map(|c| (x, y, c)))
        .collect();

    let mut out = grid.clone();
    for (x, y, color) in to_fill {
        out.fill(x, y, color);
    }
    out
}

fn dominant_neighbor(grid: &PixelGrid, x: u32, y: u32) -> Option<Rgb> {
    // At most 8 distinct colors; a linear scan keeps first-seen order.
    let mut counts: Vec<(Rgb, usize)> = Vec::with_capacity(8);
    let mut filled = 0;
    let reflect = if x * 2 + 1 > grid.size() { -1 } else { 1 };
    for (dx, dy) in MOORE_OFFSETS {
        let dx = dx * reflect;
        if let Some(Some(color)) = grid.get_checked(x as i32 + dx, y as i32 + dy) {
            filled += 1;
            match counts.iter_mut().find(|(c, _)| *c == color) {
                Some((_, n)) => *n += 1,
                None => counts.push((color, 1)),
            }
        }
    }
    if filled <= SMOOTHING_MIN_NEIGHBORS {
        return None;
    }

    let mut best: Option<(Rgb, usize)> = None;
    for (color, n) in counts {
        if best.map_or(true, |(_, m)| n > m) {
            best = Some((color, n));
        }
    }
    best.map(|(color, _)| color)
}
