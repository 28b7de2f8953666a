//! Geometry primitives: oriented trapezoids, circular joints, and the
//! point-in-polygon test used by rasterization.

/// Real-valued canvas coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// A limb segment: quadrilateral built around a pivot and rotated.
#[derive(Debug, Clone, PartialEq)]
pub struct Trapezoid {
    /// Corners ordered top-left, top-right, bottom-right, bottom-left.
    pub points: [Point; 4],
    /// Pivot the shape was built from (top-edge midpoint).
    pub center: Point,
    /// Bottom-edge midpoint, the pivot for the next chained segment.
    pub bottom_center: Point,
    pub top_width: f64,
    pub bottom_width: f64,
    pub length: f64,
    pub angle_degrees: f64,
}

impl Trapezoid {
    /// Mean of the four corners.
    pub fn centroid(&self) -> Point {
        let (sx, sy) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / 4.0, sy / 4.0)
    }
}

/// A circular joint.
#[derive(Debug, Clone, PartialEq)]
pub struct Joint {
    pub center: Point,
    pub radius: f64,
}

/// A body-part shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Trapezoid(Trapezoid),
    Joint(Joint),
}

impl Shape {
    /// Axis-aligned bounds as `(min, max)` corners.
    pub fn bounds(&self) -> (Point, Point) {
        match self {
            Shape::Trapezoid(t) => {
                let mut min = Point::new(f64::INFINITY, f64::INFINITY);
                let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
                for p in &t.points {
                    min.x = min.x.min(p.x);
                    min.y = min.y.min(p.y);
                    max.x = max.x.max(p.x);
                    max.y = max.y.max(p.y);
                }
                (min, max)
            }
            Shape::Joint(j) => (
                Point::new(j.center.x - j.radius, j.center.y - j.radius),
                Point::new(j.center.x + j.radius, j.center.y + j.radius),
            ),
        }
    }

    pub fn as_trapezoid(&self) -> Option<&Trapezoid> {
        match self {
            Shape::Trapezoid(t) => Some(t),
            Shape::Joint(_) => None,
        }
    }

    pub fn as_joint(&self) -> Option<&Joint> {
        match self {
            Shape::Joint(j) => Some(j),
            Shape::Trapezoid(_) => None,
        }
    }
}

/// Build a trapezoid hanging from `pivot`.
///
/// `angle_degrees` rotates the principal axis away from straight down:
/// 0° points +Y, positive angles swing toward +X. A negative `length`
/// extends the shape upward. Zero length yields a zero-area quad.
pub fn create_trapezoid(
    pivot: Point,
    top_width: f64,
    bottom_width: f64,
    length: f64,
    angle_degrees: f64,
) -> Trapezoid {
    let theta = angle_degrees.to_radians();
    let (sin, cos) = theta.sin_cos();
    let dir = Point::new(sin, cos);
    let perp = Point::new(cos, -sin);

    let half_top = top_width / 2.0;
    let half_bottom = bottom_width / 2.0;

    let bottom_center = Point::new(pivot.x + dir.x * length, pivot.y + dir.y * length);

    let top_left = Point::new(pivot.x - perp.x * half_top, pivot.y - perp.y * half_top);
    let top_right = Point::new(pivot.x + perp.x * half_top, pivot.y + perp.y * half_top);
    let bottom_right = Point::new(
        bottom_center.x + perp.x * half_bottom,
        bottom_center.y + perp.y * half_bottom,
    );
    let bottom_left = Point::new(
        bottom_center.x - perp.x * half_bottom,
        bottom_center.y - perp.y * half_bottom,
    );

    Trapezoid {
        points: [top_left, top_right, bottom_right, bottom_left],
        center: pivot,
        bottom_center,
        top_width,
        bottom_width,
        length,
        angle_degrees,
    }
}

/// Build a circular joint.
pub fn create_joint(center: Point, radius: f64) -> Joint {
    Joint { center, radius }
}

/// Even-odd ray-casting test.
///
/// An edge only contributes when it straddles the horizontal line through
/// `point`, so horizontal edges (equal endpoint y) are skipped before the
/// intersection is computed and never divide by zero.
pub fn is_point_in_polygon(point: Point, vertices: &[Point]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let vi = vertices[i];
        let vj = vertices[j];
        if (vi.y > point.y) != (vj.y > point.y) {
            let x_cross = (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x;
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_vertical_trapezoid_corners() {
        let t = create_trapezoid(Point::new(10.0, 5.0), 4.0, 2.0, 8.0, 0.0);
        assert_eq!(t.points[0], Point::new(8.0, 5.0));
        assert_eq!(t.points[1], Point::new(12.0, 5.0));
        assert_eq!(t.points[2], Point::new(11.0, 13.0));
        assert_eq!(t.points[3], Point::new(9.0, 13.0));
        assert_eq!(t.bottom_center, Point::new(10.0, 13.0));
        assert_eq!(t.center, Point::new(10.0, 5.0));
    }

    #[test]
    fn test_negative_length_extends_upward() {
        let t = create_trapezoid(Point::new(10.0, 20.0), 4.0, 4.0, -6.0, 0.0);
        assert!(approx(t.bottom_center.y, 14.0));
        assert!(approx(t.bottom_center.x, 10.0));
    }

    #[test]
    fn test_horizontal_trapezoid() {
        let t = create_trapezoid(Point::new(0.0, 0.0), 2.0, 2.0, 5.0, 90.0);
        assert!(approx(t.bottom_center.x, 5.0));
        assert!(approx(t.bottom_center.y, 0.0));
        // top edge is vertical through the pivot
        assert!(approx(t.points[0].x, 0.0));
        assert!(approx(t.points[0].y, 1.0));
        assert!(approx(t.points[1].y, -1.0));
    }

    #[test]
    fn test_positive_angle_swings_toward_positive_x() {
        let t = create_trapezoid(Point::new(0.0, 0.0), 1.0, 1.0, 10.0, 30.0);
        assert!(approx(t.bottom_center.x, 5.0));
        assert!(approx(t.bottom_center.y, 10.0 * 30f64.to_radians().cos()));
    }

    #[test]
    fn test_zero_length_does_not_crash() {
        let t = create_trapezoid(Point::new(3.0, 3.0), 4.0, 2.0, 0.0, 45.0);
        assert_eq!(t.bottom_center, t.center);
        for y in 0..7 {
            for x in 0..7 {
                let p = Point::new(x as f64 + 0.25, y as f64 + 0.5);
                assert!(!is_point_in_polygon(p, &t.points));
            }
        }
    }

    #[test]
    fn test_point_in_square() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
            Point::new(0.0, 4.0),
        ];
        assert!(is_point_in_polygon(Point::new(2.0, 2.0), &square));
        assert!(!is_point_in_polygon(Point::new(5.0, 2.0), &square));
        assert!(!is_point_in_polygon(Point::new(2.0, -1.0), &square));
    }

    #[test]
    fn test_point_on_horizontal_edge_line_is_finite() {
        // Ray through y = 0 runs along both horizontal edges of a degenerate quad.
        let flat = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(0.0, 0.0),
        ];
        assert!(!is_point_in_polygon(Point::new(2.0, 0.0), &flat));
    }

    #[test]
    fn test_distance() {
        assert!(approx(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0));
    }

    #[test]
    fn test_joint_bounds() {
        let shape = Shape::Joint(create_joint(Point::new(5.0, 5.0), 2.0));
        let (min, max) = shape.bounds();
        assert_eq!(min, Point::new(3.0, 3.0));
        assert_eq!(max, Point::new(7.0, 7.0));
    }
}
