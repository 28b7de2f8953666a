//! Stochastic pixel fill with bilateral mirroring, and isolated-pixel removal.

use log::debug;

use crate::color::Rgb;
use crate::grid::PixelGrid;
use crate::heatmap::OccupancyField;
use crate::plan::BodyPlan;
use crate::rng::DeterministicRng;

/// Cells at or below this occupancy are never filled, whatever the density.
pub const FILL_THRESHOLD: f64 = 0.1;

/// Filled cells with fewer Moore neighbors than this are removed.
pub const MIN_NEIGHBORS: usize = 2;

/// Sample the left half of the field and mirror every draw to the right half.
///
/// A cell above [`FILL_THRESHOLD`] is filled when a uniform draw falls below
/// `occupancy * fill_density`. The mirrored cell receives the same color, so
/// the result is exactly symmetric. Only `x < size / 2` is sampled, so on odd
/// canvases the center column stays empty. `palette` must be non-empty.
pub fn fill_pixels(
    field: &OccupancyField,
    fill_density: f64,
    palette: &[Rgb],
    plan: &BodyPlan,
    rng: &mut DeterministicRng,
) -> PixelGrid {
    let size = field.size();
    let mut grid = PixelGrid::new(size);
    let half = size / 2;

    for y in 0..size {
        for x in 0..half {
            let occupancy = field.get(x, y);
            if occupancy <= FILL_THRESHOLD {
                continue;
            }
            if rng.gen_f64() < occupancy * fill_density {
                let color = plan.pick_color(field.owner(x, y), palette, rng);
                grid.fill(x, y, color);
                grid.fill(size - 1 - x, y, color);
            }
        }
    }

    debug!("fill: {} cells filled", grid.filled_count());
    grid
}

/// Clear every filled cell with fewer than [`MIN_NEIGHBORS`] filled Moore
/// neighbors.
///
/// Single pass: neighbor counts are read from the input grid, so a cell that
/// only becomes isolated because a neighbor was removed in this pass survives.
pub fn remove_isolated_pixels(grid: &PixelGrid) -> PixelGrid {
    let doomed: Vec<(u32, u32)> = grid
        .cells()
        .filter(|&(x, y, cell)| cell.is_some() && grid.moore_count(x, y) < MIN_NEIGHBORS)
        .map(|(x, y, _)| (x, y))
        .collect();

    let mut out = grid.clone();
    for &(x, y) in &doomed {
        out.set(x, y, None);
    }
    debug!("isolated-pixel removal: {} cells cleared", doomed.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{create_joint, Point};
    use crate::skeleton::BodyPart;
    use pixelfolk_spec::ParameterSet;

    fn red() -> Rgb {
        Rgb::new(200, 0, 0)
    }

    fn field_with_disc(size: u32, cx: f64, cy: f64, r: f64) -> OccupancyField {
        let mut field = OccupancyField::new(size);
        let j = create_joint(Point::new(cx, cy), r);
        for y in 0..size {
            for x in 0..size {
                let d = crate::geometry::distance(Point::new(x as f64, y as f64), j.center);
                if d <= r {
                    field.raise(x, y, 1.0 - 0.3 * d / r, BodyPart::Torso);
                }
            }
        }
        field
    }

    #[test]
    fn test_fill_is_mirror_symmetric() {
        let field = field_with_disc(20, 6.0, 10.0, 5.0);
        let palette = [red(), Rgb::new(0, 0, 200), Rgb::new(0, 200, 0)];
        let plan = BodyPlan::generic(ParameterSet::new());
        let mut rng = DeterministicRng::new(3);
        let grid = fill_pixels(&field, 0.9, &palette, &plan, &mut rng);
        assert!(grid.filled_count() > 0);
        assert!(grid.is_mirror_symmetric());
    }

    #[test]
    fn test_zero_density_fills_nothing() {
        let field = field_with_disc(20, 10.0, 10.0, 6.0);
        let plan = BodyPlan::generic(ParameterSet::new());
        let mut rng = DeterministicRng::new(3);
        let grid = fill_pixels(&field, 0.0, &[red()], &plan, &mut rng);
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    fn test_threshold_is_a_hard_cutoff() {
        let mut field = OccupancyField::new(10);
        for y in 0..10 {
            for x in 0..5 {
                field.raise(x, y, FILL_THRESHOLD, BodyPart::Torso);
            }
        }
        let plan = BodyPlan::generic(ParameterSet::new());
        let mut rng = DeterministicRng::new(3);
        let grid = fill_pixels(&field, 1.0, &[red()], &plan, &mut rng);
        assert_eq!(grid.filled_count(), 0);
    }

    #[test]
    fn test_full_occupancy_full_density_fills_left_half() {
        let mut field = OccupancyField::new(8);
        for y in 0..8 {
            for x in 0..8 {
                field.raise(x, y, 1.0, BodyPart::Torso);
            }
        }
        let plan = BodyPlan::generic(ParameterSet::new());
        let mut rng = DeterministicRng::new(3);
        let grid = fill_pixels(&field, 1.0, &[red()], &plan, &mut rng);
        assert_eq!(grid.filled_count(), 64);
    }

    #[test]
    fn test_odd_canvas_leaves_center_column_empty() {
        let mut field = OccupancyField::new(25);
        for y in 0..25 {
            field.raise(12, y, 1.0, BodyPart::Torso);
            field.raise(11, y, 1.0, BodyPart::Torso);
        }
        let plan = BodyPlan::generic(ParameterSet::new());
        let mut rng = DeterministicRng::new(3);
        let grid = fill_pixels(&field, 1.0, &[red()], &plan, &mut rng);
        for y in 0..25 {
            assert_eq!(grid.get(12, y), None, "center cell at row {}", y);
            assert_eq!(grid.get(11, y), Some(red()));
            assert_eq!(grid.get(13, y), Some(red()));
        }
        assert_eq!(grid.filled_count(), 50);
    }

    #[test]
    fn test_same_seed_same_fill() {
        let field = field_with_disc(24, 8.0, 12.0, 7.0);
        let palette = [red(), Rgb::new(0, 0, 200)];
        let plan = BodyPlan::generic(ParameterSet::new());
        let a = fill_pixels(&field, 0.8, &palette, &plan, &mut DeterministicRng::new(11));
        let b = fill_pixels(&field, 0.8, &palette, &plan, &mut DeterministicRng::new(11));
        assert_eq!(a, b);
    }

    #[test]
    fn test_isolated_single_pixel_removed() {
        let mut grid = PixelGrid::new(10);
        grid.fill(5, 5, red());
        let out = remove_isolated_pixels(&grid);
        assert_eq!(out.filled_count(), 0);
    }

    #[test]
    fn test_diagonal_chain_is_single_pass() {
        let mut grid = PixelGrid::new(10);
        grid.fill(2, 2, red());
        grid.fill(3, 3, red());
        grid.fill(4, 4, red());
        let out = remove_isolated_pixels(&grid);
        // endpoints have one neighbor each; the middle has two
        assert_eq!(out.get(2, 2), None);
        assert_eq!(out.get(4, 4), None);
        assert_eq!(out.get(3, 3), Some(red()));
        // the survivor is now isolated, but only a second pass would remove it
        assert_eq!(out.moore_count(3, 3), 0);
        assert_eq!(remove_isolated_pixels(&out).filled_count(), 0);
    }

    #[test]
    fn test_solid_block_survives() {
        let mut grid = PixelGrid::new(10);
        for y in 3..6 {
            for x in 3..6 {
                grid.fill(x, y, red());
            }
        }
        assert_eq!(remove_isolated_pixels(&grid), grid);
    }

    #[test]
    fn test_removal_leaves_input_untouched() {
        let mut grid = PixelGrid::new(6);
        grid.fill(0, 0, red());
        let _ = remove_isolated_pixels(&grid);
        assert_eq!(grid.filled_count(), 1);
    }
}
