//! Occupancy field ("heatmap") rasterization.
//!
//! Every shape contributes a radial falloff from its center; overlapping
//! shapes take the per-cell maximum, never a sum.

use log::{debug, warn};

use crate::geometry::{distance, is_point_in_polygon, Joint, Point, Shape, Trapezoid};
use crate::skeleton::{BodyPart, Skeleton};

/// Intensity lost between a trapezoid's centroid and its farthest corner.
const TRAPEZOID_FALLOFF: f64 = 0.5;
/// Intensity lost between a joint's center and its rim.
const JOINT_FALLOFF: f64 = 0.3;

/// Per-cell fill probability in [0, 1], plus the part that set each maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancyField {
    size: u32,
    values: Vec<f64>,
    owners: Vec<Option<BodyPart>>,
}

impl OccupancyField {
    /// Create an all-zero field.
    pub fn new(size: u32) -> Self {
        let len = (size as usize) * (size as usize);
        Self {
            size,
            values: vec![0.0; len],
            owners: vec![None; len],
        }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.size as usize) + x as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.values[self.index(x, y)]
    }

    /// Part whose shape produced the cell's value.
    #[inline]
    pub fn owner(&self, x: u32, y: u32) -> Option<BodyPart> {
        self.owners[self.index(x, y)]
    }

    /// Raise a cell to `value` if that is higher than what it holds.
    /// Returns true if the cell changed.
    pub fn raise(&mut self, x: u32, y: u32, value: f64, part: BodyPart) -> bool {
        let idx = self.index(x, y);
        if value > self.values[idx] {
            self.values[idx] = value;
            self.owners[idx] = Some(part);
            true
        } else {
            false
        }
    }

    /// Number of cells with a positive value.
    pub fn covered_count(&self) -> usize {
        self.values.iter().filter(|&&v| v > 0.0).count()
    }

    /// Raw values, row-major.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Rasterize every shape of the skeleton into a fresh field.
pub fn generate_heatmap(skeleton: &Skeleton, canvas_size: u32) -> OccupancyField {
    let mut field = OccupancyField::new(canvas_size);
    for (part, shape) in skeleton.iter() {
        let touched = match shape {
            Shape::Trapezoid(t) => rasterize_trapezoid(&mut field, t, part),
            Shape::Joint(j) => rasterize_joint(&mut field, j, part),
        };
        if touched == 0 {
            warn!("{} covers no cells", part.as_str());
        }
    }
    debug!(
        "heatmap: {} of {} cells covered",
        field.covered_count(),
        field.values.len()
    );
    field
}

/// Integer cell range covering `[min, max]`, clipped to the canvas.
/// Returns `None` when the range misses the canvas entirely.
fn clipped_range(min: f64, max: f64, size: u32) -> Option<(u32, u32)> {
    if size == 0 || !min.is_finite() || !max.is_finite() {
        return None;
    }
    let last = (size - 1) as f64;
    let lo = min.floor().max(0.0);
    let hi = max.ceil().min(last);
    if lo > hi {
        return None;
    }
    Some((lo as u32, hi as u32))
}

fn cell_bounds(shape: &Shape, size: u32) -> Option<((u32, u32), (u32, u32))> {
    let (min, max) = shape.bounds();
    Some((
        clipped_range(min.x, max.x, size)?,
        clipped_range(min.y, max.y, size)?,
    ))
}

fn rasterize_trapezoid(field: &mut OccupancyField, t: &Trapezoid, part: BodyPart) -> usize {
    let shape = Shape::Trapezoid(t.clone());
    let Some(((x0, x1), (y0, y1))) = cell_bounds(&shape, field.size) else {
        return 0;
    };

    let centroid = t.centroid();
    let max_dist = t
        .points
        .iter()
        .map(|p| distance(*p, centroid))
        .fold(0.0, f64::max);

    let mut touched = 0;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = Point::new(x as f64, y as f64);
            if !is_point_in_polygon(p, &t.points) {
                continue;
            }
            let intensity = if max_dist > 0.0 {
                (1.0 - TRAPEZOID_FALLOFF * (distance(p, centroid) / max_dist)).max(0.0)
            } else {
                1.0
            };
            field.raise(x, y, intensity, part);
            touched += 1;
        }
    }
    touched
}

fn rasterize_joint(field: &mut OccupancyField, j: &Joint, part: BodyPart) -> usize {
    if j.radius <= 0.0 {
        return 0;
    }
    let shape = Shape::Joint(j.clone());
    let Some(((x0, x1), (y0, y1))) = cell_bounds(&shape, field.size) else {
        return 0;
    };

    let mut touched = 0;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let d = distance(Point::new(x as f64, y as f64), j.center);
            if d > j.radius {
                continue;
            }
            let intensity = (1.0 - JOINT_FALLOFF * (d / j.radius)).max(0.0);
            field.raise(x, y, intensity, part);
            touched += 1;
        }
    }
    touched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{create_joint, create_trapezoid};
    use crate::skeleton::build_skeleton;
    use crate::test_support::standard_body;

    #[test]
    fn test_trapezoid_peak_at_centroid() {
        let mut field = OccupancyField::new(20);
        let t = create_trapezoid(Point::new(10.0, 2.0), 8.0, 8.0, 16.0, 0.0);
        rasterize_trapezoid(&mut field, &t, BodyPart::Torso);
        // centroid is (10, 10)
        assert_eq!(field.get(10, 10), 1.0);
        assert!(field.get(10, 4) < field.get(10, 8));
        assert_eq!(field.owner(10, 10), Some(BodyPart::Torso));
        // outside the quad
        assert_eq!(field.get(1, 10), 0.0);
    }

    #[test]
    fn test_trapezoid_falloff_never_below_half() {
        let mut field = OccupancyField::new(30);
        let t = create_trapezoid(Point::new(15.0, 2.0), 10.0, 6.0, 20.0, 20.0);
        rasterize_trapezoid(&mut field, &t, BodyPart::Torso);
        for &v in field.values() {
            assert!(v == 0.0 || (0.5..=1.0).contains(&v), "{}", v);
        }
    }

    #[test]
    fn test_joint_falloff() {
        let mut field = OccupancyField::new(20);
        let j = create_joint(Point::new(10.0, 10.0), 5.0);
        rasterize_joint(&mut field, &j, BodyPart::LeftKnee);
        assert_eq!(field.get(10, 10), 1.0);
        assert!((field.get(15, 10) - 0.7).abs() < 1e-12);
        assert_eq!(field.get(16, 10), 0.0);
    }

    #[test]
    fn test_overlap_takes_maximum() {
        let mut field = OccupancyField::new(20);
        let j = create_joint(Point::new(10.0, 10.0), 5.0);
        rasterize_joint(&mut field, &j, BodyPart::LeftKnee);
        let other = create_joint(Point::new(14.0, 10.0), 5.0);
        rasterize_joint(&mut field, &other, BodyPart::RightKnee);
        // (10,10) is the first joint's center
        assert_eq!(field.get(10, 10), 1.0);
        assert_eq!(field.owner(10, 10), Some(BodyPart::LeftKnee));
        // (12,10) is equidistant; no accumulation past a single contribution
        let single = 1.0 - 0.3 * (2.0 / 5.0);
        assert!((field.get(12, 10) - single).abs() < 1e-12);
    }

    #[test]
    fn test_shapes_off_canvas_are_ignored() {
        let mut field = OccupancyField::new(10);
        let t = create_trapezoid(Point::new(-50.0, -50.0), 5.0, 5.0, 5.0, 0.0);
        assert_eq!(rasterize_trapezoid(&mut field, &t, BodyPart::Torso), 0);
        let j = create_joint(Point::new(100.0, 5.0), 3.0);
        assert_eq!(rasterize_joint(&mut field, &j, BodyPart::LeftKnee), 0);
        assert_eq!(field.covered_count(), 0);
    }

    #[test]
    fn test_partially_off_canvas_is_clipped() {
        let mut field = OccupancyField::new(10);
        let j = create_joint(Point::new(0.0, 0.0), 3.0);
        assert!(rasterize_joint(&mut field, &j, BodyPart::LeftKnee) > 0);
        assert_eq!(field.get(0, 0), 1.0);
    }

    #[test]
    fn test_zero_radius_joint_is_empty() {
        let mut field = OccupancyField::new(10);
        let j = create_joint(Point::new(5.0, 5.0), 0.0);
        assert_eq!(rasterize_joint(&mut field, &j, BodyPart::LeftKnee), 0);
    }

    #[test]
    fn test_standard_body_heatmap() {
        let skeleton = build_skeleton(&standard_body(), 50);
        let field = generate_heatmap(&skeleton, 50);
        assert!(field.covered_count() > 200);
        assert!(field.values().iter().all(|v| (0.0..=1.0).contains(v)));
    }
}
