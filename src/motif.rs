//! Motif model: placed-motif entities, sparse updates, and the store that
//! owns them.
//!
//! A `Motif` is one decorative image instance placed on the garment: a base
//! size, a multiplicative scale, an optional rotation, and an opaque handle
//! to the decoded bitmap. The `MotifStore` is the single owner of all
//! placed motifs. The manager mutates it through its operations; renderers
//! read it back in list order, which is both the draw order and the order
//! the overlap-resolution pass walks.

#[cfg(test)]
#[path = "motif_test.rs"]
mod motif_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Rect;
use crate::image::ImageHandle;

/// Unique identifier for a placed motif.
pub type MotifId = Uuid;

/// Stitch grid covered by a motif at its current size. Display-only: the
/// chart view reads it, placement never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StitchCount {
    pub cols: u32,
    pub rows: u32,
}

impl StitchCount {
    /// Whole stitches covered by a `width` × `height` box at `stitch_size`
    /// canvas units per stitch.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn for_size(width: f64, height: f64, stitch_size: f64) -> Self {
        if stitch_size <= 0.0 {
            return Self { cols: 0, rows: 0 };
        }
        Self {
            cols: (width / stitch_size).floor() as u32,
            rows: (height / stitch_size).floor() as u32,
        }
    }
}

/// A placed motif as stored in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Motif {
    /// Unique identifier for this motif.
    pub id: MotifId,
    /// Handle into the host's asset cache for the decoded bitmap.
    pub image: ImageHandle,
    /// Left edge of the box in canvas coordinates.
    pub x: f64,
    /// Top edge of the box in canvas coordinates.
    pub y: f64,
    /// Base width before scale.
    pub width: f64,
    /// Base height before scale.
    pub height: f64,
    /// Horizontal scale factor; 1.0 = natural size.
    pub scale_x: f64,
    /// Vertical scale factor; 1.0 = natural size.
    pub scale_y: f64,
    /// Clockwise rotation in degrees about the effective box center.
    pub rotation: f64,
    /// Stitch grid at the current size.
    pub stitches: StitchCount,
}

impl Motif {
    /// Width after scale — the horizontal extent used for bounds and
    /// collision checks.
    #[must_use]
    pub fn scaled_width(&self) -> f64 {
        self.width * self.scale_x
    }

    /// Height after scale.
    #[must_use]
    pub fn scaled_height(&self) -> f64 {
        self.height * self.scale_y
    }

    /// Effective bounding box: position plus scaled size, carrying
    /// rotation.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::with_rotation(self.x, self.y, self.scaled_width(), self.scaled_height(), self.rotation)
    }

    /// Effective box shrunk by `padding` on every side, as used in
    /// collision tests.
    #[must_use]
    pub fn padded_rect(&self, padding: f64) -> Rect {
        self.rect().shrink(padding)
    }
}

/// Sparse update for a motif, as committed at drag/transform end. Only
/// present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialMotif {
    /// New x position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// New y position, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// New horizontal scale, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    /// New vertical scale, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
    /// New rotation in degrees, if being updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

/// Ordered collection of placed motifs.
///
/// List order is draw order and the order the resolve pass walks. The
/// revision counter bumps on every accepted mutation so read-only
/// subscribers can detect change without diffing the list.
#[derive(Debug, Default)]
pub struct MotifStore {
    motifs: Vec<Motif>,
    revision: u64,
}

impl MotifStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Placed motifs in draw order.
    #[must_use]
    pub fn motifs(&self) -> &[Motif] {
        &self.motifs
    }

    /// Bumped on every accepted mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of placed motifs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    /// Returns `true` if no motifs are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &MotifId) -> Option<&Motif> {
        self.motifs.iter().find(|m| m.id == *id)
    }

    #[must_use]
    pub fn contains(&self, id: &MotifId) -> bool {
        self.motifs.iter().any(|m| m.id == *id)
    }

    /// Append a motif at the top of the draw order.
    pub fn insert(&mut self, motif: Motif) {
        self.motifs.push(motif);
        self.revision += 1;
    }

    /// Remove a motif by id, returning it if it was present.
    pub fn remove(&mut self, id: &MotifId) -> Option<Motif> {
        let idx = self.motifs.iter().position(|m| m.id == *id)?;
        self.revision += 1;
        Some(self.motifs.remove(idx))
    }

    /// Apply a sparse update to an existing motif. Returns `false` if the
    /// motif doesn't exist.
    pub fn apply_partial(&mut self, id: &MotifId, partial: &PartialMotif) -> bool {
        let Some(m) = self.motifs.iter_mut().find(|m| m.id == *id) else {
            return false;
        };
        if let Some(x) = partial.x {
            m.x = x;
        }
        if let Some(y) = partial.y {
            m.y = y;
        }
        if let Some(sx) = partial.scale_x {
            m.scale_x = sx;
        }
        if let Some(sy) = partial.scale_y {
            m.scale_y = sy;
        }
        if let Some(r) = partial.rotation {
            m.rotation = r;
        }
        self.revision += 1;
        true
    }

    /// Move a motif. Returns `false` if it doesn't exist.
    pub fn set_position(&mut self, id: &MotifId, x: f64, y: f64) -> bool {
        let Some(m) = self.motifs.iter_mut().find(|m| m.id == *id) else {
            return false;
        };
        m.x = x;
        m.y = y;
        self.revision += 1;
        true
    }

    /// Replace a motif's base dimensions and derived stitch grid. Scale is
    /// untouched. Returns `false` if the motif doesn't exist.
    pub fn set_size(&mut self, id: &MotifId, width: f64, height: f64, stitches: StitchCount) -> bool {
        let Some(m) = self.motifs.iter_mut().find(|m| m.id == *id) else {
            return false;
        };
        m.width = width;
        m.height = height;
        m.stitches = stitches;
        self.revision += 1;
        true
    }

    /// Replace all motifs with a persisted snapshot.
    pub fn load_snapshot(&mut self, motifs: Vec<Motif>) {
        self.motifs = motifs;
        self.revision += 1;
    }
}
