//! Interactive drag constraint: per-frame bounds clamp and drag-end
//! reconciliation.
//!
//! While a drag gesture is live the only affordable check is the bounds
//! clamp — it runs on every pointer frame and never consults other motifs,
//! so the motif cannot visually leave the garment while moving. The full
//! collision check happens once, on release: clamp again, test against
//! every other motif, and either snap to the nearest valid position or
//! revert to the last committed one.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::bounds::Bounds;
use crate::geometry::{Point, Rect};
use crate::placement::{PlacementShape, find_position, position_is_valid};

/// What to do when a released motif lands on another one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPolicy {
    /// Spiral-search from the drop point and take the nearest free spot;
    /// falls back to the last valid position when the search fails.
    #[default]
    SnapToNearest,
    /// Put the motif back where it sat before the gesture.
    RevertToLastValid,
}

/// Per-frame clamp keeping a `scaled_width` × `scaled_height` box inside
/// `bounds`. Left/top snap forward, right/bottom snap backward; no
/// collision test.
#[must_use]
pub fn clamp_to_bounds(pos: Point, scaled_width: f64, scaled_height: f64, bounds: &Bounds) -> Point {
    // min before max so the left/top edge wins for an oversized motif;
    // f64::clamp rejects hi < lo.
    Point::new(
        pos.x.min(bounds.right - scaled_width).max(bounds.left),
        pos.y.min(bounds.bottom - scaled_height).max(bounds.top),
    )
}

/// Reconcile a released drag or transform: clamp to bounds, then resolve
/// any collision according to `policy`.
///
/// Always returns a position. `last_valid` is the motif's committed
/// position — authoritative state only changes on commit, so it is valid by
/// construction and serves as the fallback in both policies.
#[must_use]
pub fn reconcile_drop(
    dropped: Point,
    last_valid: Point,
    shape: PlacementShape,
    others: &[Rect],
    bounds: &Bounds,
    padding: f64,
    policy: DragPolicy,
) -> Point {
    let clamped = clamp_to_bounds(dropped, shape.scaled_width(), shape.scaled_height(), bounds);
    if position_is_valid(clamped, shape, others, bounds, padding) {
        return clamped;
    }
    match policy {
        DragPolicy::SnapToNearest => {
            find_position(clamped, shape, others, bounds, padding).unwrap_or(last_valid)
        }
        DragPolicy::RevertToLastValid => last_valid,
    }
}
