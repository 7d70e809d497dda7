//! Spiral placement search: find the nearest valid position for a motif.
//!
//! The search accepts the caller's preferred start point when it is already
//! in bounds and collision-free, then walks a discrete outward spiral
//! (right, down, left, up, arm length growing every second turn) probing
//! candidate positions. The first acceptable probe is by construction the
//! closest in walk order, which keeps duplicates and snapped drops visually
//! adjacent to where the user wanted them. The walk gives up after a fixed
//! probe budget; callers decide whether that is a best-effort fallback or a
//! user-facing error.

#[cfg(test)]
#[path = "placement_test.rs"]
mod placement_test;

use crate::bounds::Bounds;
use crate::consts::{MAX_SEARCH_STEPS, SEARCH_STEP_SIZE};
use crate::geometry::{Point, Rect, intersects};

/// Position-independent description of the box being placed.
#[derive(Debug, Clone, Copy)]
pub struct PlacementShape {
    pub width: f64,
    pub height: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotation: f64,
}

impl PlacementShape {
    /// An unscaled, unrotated shape.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, scale_x: 1.0, scale_y: 1.0, rotation: 0.0 }
    }

    #[must_use]
    pub fn scaled_width(&self) -> f64 {
        self.width * self.scale_x
    }

    #[must_use]
    pub fn scaled_height(&self) -> f64 {
        self.height * self.scale_y
    }

    /// Effective bounding box at `pos`.
    #[must_use]
    pub fn rect_at(&self, pos: Point) -> Rect {
        Rect::with_rotation(pos.x, pos.y, self.scaled_width(), self.scaled_height(), self.rotation)
    }
}

/// Whether `pos` is a legal placement: the exact box fully inside `bounds`
/// and the padded box clear of every obstacle.
///
/// `others` carries the *unpadded* effective boxes of the existing motifs;
/// `padding` is carved off every side of the probe and of each obstacle, so
/// two raw boxes may close to within twice the padding before they count as
/// colliding.
#[must_use]
pub fn position_is_valid(
    pos: Point,
    shape: PlacementShape,
    others: &[Rect],
    bounds: &Bounds,
    padding: f64,
) -> bool {
    if !bounds.contains_rect(&shape.rect_at(pos)) {
        return false;
    }
    let probe = shape.rect_at(pos).shrink(padding);
    !others.iter().any(|other| intersects(&probe, &other.shrink(padding)))
}

/// Find the closest valid position to `start`, or `None` when the probe
/// budget runs out.
#[must_use]
pub fn find_position(
    start: Point,
    shape: PlacementShape,
    others: &[Rect],
    bounds: &Bounds,
    padding: f64,
) -> Option<Point> {
    if position_is_valid(start, shape, others, bounds, padding) {
        return Some(start);
    }

    let mut x = start.x;
    let mut y = start.y;
    let mut direction = 0u8; // 0 right, 1 down, 2 left, 3 up
    let mut arm_len = 1usize;
    let mut steps_on_arm = 0usize;
    let mut turns = 0usize;

    for _step in 0..MAX_SEARCH_STEPS {
        match direction {
            0 => x += SEARCH_STEP_SIZE,
            1 => y += SEARCH_STEP_SIZE,
            2 => x -= SEARCH_STEP_SIZE,
            _ => y -= SEARCH_STEP_SIZE,
        }

        let candidate = Point::new(x, y);
        if position_is_valid(candidate, shape, others, bounds, padding) {
            return Some(candidate);
        }

        steps_on_arm += 1;
        if steps_on_arm >= arm_len {
            steps_on_arm = 0;
            direction = (direction + 1) % 4;
            turns += 1;
            if turns % 2 == 0 {
                arm_len += 1;
            }
        }
    }

    tracing::debug!(
        start_x = start.x,
        start_y = start.y,
        obstacles = others.len(),
        budget = MAX_SEARCH_STEPS,
        "spiral search exhausted without a valid position"
    );
    None
}
