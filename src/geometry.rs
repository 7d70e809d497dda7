//! Pure rectangle intersection tests for motif collision checks.
//!
//! This module has no state and no side effects. Both the placement search
//! and the drag-end reconciliation use [`intersects`] as their overlap
//! oracle: an axis-aligned fast path for unrotated boxes, and the
//! Separating Axis Theorem over corner polygons once rotation is involved.
//! Two rectangles need only four candidate axes (parallel edges share
//! them), so either path is O(1).

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// Rotations smaller than this are treated as axis-aligned.
const ROTATION_EPSILON: f64 = 1e-9;

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A possibly-rotated rectangle in canvas coordinates.
///
/// `x`/`y` are the top-left corner of the unrotated box; `rotation` is in
/// degrees, clockwise-positive, applied about the box center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
}

impl Rect {
    /// An unrotated rectangle.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height, rotation: 0.0 }
    }

    #[must_use]
    pub fn with_rotation(x: f64, y: f64, width: f64, height: f64, rotation: f64) -> Self {
        Self { x, y, width, height, rotation }
    }

    /// Center of the unrotated box; also the rotation pivot.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether the rectangle carries a meaningful rotation.
    #[must_use]
    pub fn is_rotated(&self) -> bool {
        self.rotation.abs() > ROTATION_EPSILON
    }

    /// The four corners (top-left, top-right, bottom-right, bottom-left)
    /// after rotating about the center.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        let angle = self.rotation.to_radians();
        let (sin, cos) = angle.sin_cos();
        let c = self.center();
        let w2 = self.width / 2.0;
        let h2 = self.height / 2.0;
        let local = [(-w2, -h2), (w2, -h2), (w2, h2), (-w2, h2)];
        local.map(|(lx, ly)| Point::new(c.x + lx * cos - ly * sin, c.y + lx * sin + ly * cos))
    }

    /// Inset every side by `margin`, keeping rotation. Width and height
    /// clamp at 1.0 so a heavily padded box still participates in
    /// collision tests.
    #[must_use]
    pub fn shrink(&self, margin: f64) -> Self {
        Self {
            x: self.x + margin,
            y: self.y + margin,
            width: (self.width - margin * 2.0).max(1.0),
            height: (self.height - margin * 2.0).max(1.0),
            rotation: self.rotation,
        }
    }
}

/// Axis-aligned overlap test on closed intervals; ignores rotation.
///
/// Touching edges count as intersecting, matching the verdict of
/// [`intersects`] on unrotated boxes. Callers shrink boxes by the collision
/// padding first, which removes the zero-gap case in practice.
#[must_use]
pub fn aabb_intersects(a: &Rect, b: &Rect) -> bool {
    a.x <= b.x + b.width && b.x <= a.x + a.width && a.y <= b.y + b.height && b.y <= a.y + a.height
}

/// Rotation-aware rectangle intersection.
///
/// Unrotated pairs take the axis-aligned path; otherwise the two corner
/// polygons run through the separating-axis test.
#[must_use]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    if !a.is_rotated() && !b.is_rotated() {
        return aabb_intersects(a, b);
    }
    polygons_intersect(&a.corners(), &b.corners())
}

/// Project `corners` onto `axis`, returning the min/max scalar extent.
fn project(axis: Point, corners: &[Point; 4]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in corners {
        let dot = p.x * axis.x + p.y * axis.y;
        min = min.min(dot);
        max = max.max(dot);
    }
    (min, max)
}

/// Separating Axis Theorem over two convex quadrilaterals: the shapes are
/// disjoint iff the projections onto some edge normal do not overlap.
fn polygons_intersect(a: &[Point; 4], b: &[Point; 4]) -> bool {
    for poly in [a, b] {
        for i in 0..poly.len() {
            let p1 = poly[i];
            let p2 = poly[(i + 1) % poly.len()];
            let axis = Point::new(-(p2.y - p1.y), p2.x - p1.x);
            let (min_a, max_a) = project(axis, a);
            let (min_b, max_b) = project(axis, b);
            if max_a < min_b || max_b < min_a {
                return false;
            }
        }
    }
    true
}
