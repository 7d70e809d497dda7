//! The rectangular placement region: where motifs may legally sit.
//!
//! `Bounds` is derived once per garment/gauge configuration by the layout
//! calculator and shared by copy across every placement operation in a
//! session; nothing in the engine mutates it.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Rectangular placement region in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    /// Build from a top-left corner and a size.
    #[must_use]
    pub fn from_dimensions(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    /// Fully-inside test for an unrotated box at `(x, y)`. Boxes touching
    /// the region edge are inside.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        x >= self.left && y >= self.top && x + width <= self.right && y + height <= self.bottom
    }

    /// Fully-inside test for a possibly-rotated rectangle: every corner
    /// must lie within the region.
    #[must_use]
    pub fn contains_rect(&self, rect: &Rect) -> bool {
        if !rect.is_rotated() {
            return self.contains(rect.x, rect.y, rect.width, rect.height);
        }
        rect.corners()
            .iter()
            .all(|p| p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom)
    }
}
