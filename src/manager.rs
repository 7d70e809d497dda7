//! Motif lifecycle orchestration: create, duplicate, delete, gauge-driven
//! resizes, and the overlap-resolution pass.
//!
//! `MotifManager` is the single writer for the motif document. It owns the
//! store and the selection, runs every geometric decision through the
//! placement search, and reports failures as typed [`MotifError`]s the UI
//! layer turns into user guidance — a full canvas never silently overlaps
//! motifs, it tells the user to remove one or enlarge the garment.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use uuid::Uuid;

use crate::bounds::Bounds;
use crate::consts::{
    DEFAULT_COLLISION_PADDING, DEFAULT_MAX_MOTIFS, DEFAULT_SIZE_RATIO, DEFAULT_STITCH_SIZE,
    DUPLICATE_OFFSET,
};
use crate::drag::{DragPolicy, clamp_to_bounds, reconcile_drop};
use crate::geometry::{Point, Rect};
use crate::image::{ImageLoadError, ImageLoader, LoadedImage};
use crate::motif::{Motif, MotifId, MotifStore, PartialMotif, StitchCount};
use crate::placement::{PlacementShape, find_position};

/// Tunable knobs for the manager. `Default` matches the shipped garment
/// canvas.
#[derive(Debug, Clone, Copy)]
pub struct ManagerConfig {
    /// Ceiling on simultaneously placed motifs.
    pub max_motifs: usize,
    /// Canvas units per stitch for the display-only stitch grid.
    pub stitch_size: f64,
    /// Margin shaved off every box side before collision tests.
    pub collision_padding: f64,
    /// Fraction of the smaller bounds dimension used when no explicit size
    /// is requested for a new motif.
    pub default_size_ratio: f64,
    /// Seed offset on both axes when placing a duplicate next to its
    /// source.
    pub duplicate_offset: f64,
    /// Whether transform commits may carry rotation. Off by default; the
    /// data model and geometry keep rotation either way, but commits
    /// ignore incoming rotation while this is off.
    pub rotation_enabled: bool,
    /// Collision policy at drag/transform end.
    pub drag_policy: DragPolicy,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            max_motifs: DEFAULT_MAX_MOTIFS,
            stitch_size: DEFAULT_STITCH_SIZE,
            collision_padding: DEFAULT_COLLISION_PADDING,
            default_size_ratio: DEFAULT_SIZE_RATIO,
            duplicate_offset: DUPLICATE_OFFSET,
            rotation_enabled: false,
            drag_policy: DragPolicy::SnapToNearest,
        }
    }
}

/// Failures surfaced to the UI layer. All recoverable: the user changes an
/// input (removes a motif, adjusts gauge) and retries.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MotifError {
    /// The configured motif ceiling is already reached. Checked before any
    /// image or geometry work.
    #[error("motif limit reached (max {max})")]
    MaxMotifsReached { max: usize },
    /// A create or duplicate exhausted the search budget without finding a
    /// free slot.
    #[error("no free space for the motif; remove one or enlarge the garment")]
    NoSpaceAvailable,
    /// A batch resize left at least one motif without a valid slot. The
    /// store keeps the best-effort result for the motifs that did fit.
    #[error("{} motif(s) no longer fit after resizing", .unplaced.len())]
    MotifsCannotFit { unplaced: Vec<MotifId> },
    /// Primary and fallback image sources both failed to load.
    #[error(transparent)]
    ImageLoadFailed(#[from] ImageLoadError),
    /// An operation referenced a motif that is not in the document.
    #[error("unknown motif: {0}")]
    UnknownMotif(MotifId),
}

/// Owner and single writer of the motif document.
pub struct MotifManager {
    config: ManagerConfig,
    store: MotifStore,
    selected_id: Option<MotifId>,
}

impl Default for MotifManager {
    fn default() -> Self {
        Self::new(ManagerConfig::default())
    }
}

impl MotifManager {
    #[must_use]
    pub fn new(config: ManagerConfig) -> Self {
        Self { config, store: MotifStore::new(), selected_id: None }
    }

    // --- Queries ---

    /// Placed motifs in draw order. Read-only; mutations go through the
    /// operations below.
    #[must_use]
    pub fn motifs(&self) -> &[Motif] {
        self.store.motifs()
    }

    /// Look up a motif by id.
    #[must_use]
    pub fn motif(&self, id: &MotifId) -> Option<&Motif> {
        self.store.get(id)
    }

    /// Bumped on every accepted mutation; cheap change detection for
    /// read-only subscribers.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    /// The currently selected motif, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<MotifId> {
        self.selected_id
    }

    #[must_use]
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Whether another motif fits under the configured ceiling.
    #[must_use]
    pub fn can_add(&self) -> bool {
        self.store.len() < self.config.max_motifs
    }

    // --- Selection ---

    /// Select `id`, or clear the selection with `None`. Unknown ids leave
    /// the selection untouched.
    pub fn select(&mut self, id: Option<MotifId>) {
        match id {
            Some(id) if !self.store.contains(&id) => {}
            other => self.selected_id = other,
        }
    }

    // --- Lifecycle ---

    /// Create a motif from `source`, centered in `bounds` and nudged to the
    /// nearest free slot.
    ///
    /// The ceiling is checked before any image or geometry work. When the
    /// primary source fails to decode, `fallback` is tried once. Without an
    /// explicit `desired_size` the motif starts as a square sized by the
    /// configured fraction of the smaller bounds dimension. The new motif
    /// becomes the selection.
    pub fn add_motif(
        &mut self,
        loader: &mut dyn ImageLoader,
        source: &str,
        fallback: Option<&str>,
        desired_size: Option<(f64, f64)>,
        bounds: &Bounds,
    ) -> Result<MotifId, MotifError> {
        if !self.can_add() {
            return Err(MotifError::MaxMotifsReached { max: self.config.max_motifs });
        }

        let image = resolve_image(loader, source, fallback)?;

        let (width, height) = desired_size.unwrap_or_else(|| {
            let side = bounds.width().min(bounds.height()) * self.config.default_size_ratio;
            (side, side)
        });

        let start = Point::new(bounds.center_x() - width / 2.0, bounds.center_y() - height / 2.0);
        let shape = PlacementShape::new(width, height);
        let pos = find_position(start, shape, &self.obstacle_rects(None), bounds, self.config.collision_padding)
            .ok_or(MotifError::NoSpaceAvailable)?;

        let motif = Motif {
            id: Uuid::new_v4(),
            image: image.handle,
            x: pos.x,
            y: pos.y,
            width,
            height,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
            stitches: StitchCount::for_size(width, height, self.config.stitch_size),
        };
        let id = motif.id;
        self.store.insert(motif);
        self.selected_id = Some(id);
        Ok(id)
    }

    /// Duplicate an existing motif, seeding the search just off the source
    /// so the clone lands visually adjacent. The clone carries the source's
    /// size, scale, rotation, image handle, and stitch grid, and becomes
    /// the selection.
    pub fn duplicate_motif(&mut self, id: &MotifId, bounds: &Bounds) -> Result<MotifId, MotifError> {
        if !self.can_add() {
            return Err(MotifError::MaxMotifsReached { max: self.config.max_motifs });
        }
        let source = self.store.get(id).ok_or(MotifError::UnknownMotif(*id))?.clone();

        let offset = self.config.duplicate_offset;
        let start = Point::new(source.x + offset, source.y + offset);
        let shape = PlacementShape {
            width: source.width,
            height: source.height,
            scale_x: source.scale_x,
            scale_y: source.scale_y,
            rotation: source.rotation,
        };
        let pos = find_position(start, shape, &self.obstacle_rects(None), bounds, self.config.collision_padding)
            .ok_or(MotifError::NoSpaceAvailable)?;

        let motif = Motif { id: Uuid::new_v4(), x: pos.x, y: pos.y, ..source };
        let id = motif.id;
        self.store.insert(motif);
        self.selected_id = Some(id);
        Ok(id)
    }

    /// Remove a motif, clearing the selection when it pointed at it.
    pub fn delete_motif(&mut self, id: &MotifId) -> Option<Motif> {
        let removed = self.store.remove(id);
        if removed.is_some() && self.selected_id.as_ref() == Some(id) {
            self.selected_id = None;
        }
        removed
    }

    /// Keyboard path: remove whatever is selected.
    pub fn delete_selected(&mut self) -> Option<Motif> {
        let id = self.selected_id?;
        self.delete_motif(&id)
    }

    /// Replace the document with previously persisted motifs. Clears the
    /// selection.
    pub fn load_snapshot(&mut self, motifs: Vec<Motif>) {
        self.store.load_snapshot(motifs);
        self.selected_id = None;
    }

    // --- Gauge resize ---

    /// Gauge-driven size update: replace the base dimensions (scale is
    /// untouched), recompute the stitch grid, then translate inward on any
    /// violated edge. Size first, position second — the motif is never
    /// shrunk to fit.
    pub fn update_motif_size(
        &mut self,
        id: &MotifId,
        size: (f64, f64),
        bounds: &Bounds,
    ) -> Result<(), MotifError> {
        let Some(motif) = self.store.get(id) else {
            return Err(MotifError::UnknownMotif(*id));
        };
        let (width, height) = size;
        let scaled_w = width * motif.scale_x;
        let scaled_h = height * motif.scale_y;

        // Right/bottom push the box back first; the left/top clamp runs
        // last, so that edge wins when the box outgrows the bounds.
        let mut x = motif.x;
        let mut y = motif.y;
        if x + scaled_w > bounds.right {
            x = bounds.right - scaled_w;
        }
        if x < bounds.left {
            x = bounds.left;
        }
        if y + scaled_h > bounds.bottom {
            y = bounds.bottom - scaled_h;
        }
        if y < bounds.top {
            y = bounds.top;
        }

        let stitches = StitchCount::for_size(width, height, self.config.stitch_size);
        self.store.set_size(id, width, height, stitches);
        self.store.set_position(id, x, y);
        Ok(())
    }

    /// Post-resize pass restoring the no-overlap invariant.
    ///
    /// Walks the list in draw order. Each motif searches from its own
    /// current position against the motifs already resolved ahead of it;
    /// successes commit their (possibly unchanged) position and join the
    /// obstacle set, failures stay put and are reported in
    /// [`MotifError::MotifsCannotFit`]. Deterministic for a given list
    /// order, and a no-op when every motif is already valid.
    pub fn resolve_overlaps(&mut self, bounds: &Bounds) -> Result<(), MotifError> {
        let padding = self.config.collision_padding;
        let mut resolved: Vec<Rect> = Vec::with_capacity(self.store.len());
        let mut unplaced: Vec<MotifId> = Vec::new();
        let mut moves: Vec<(MotifId, Point)> = Vec::new();

        for motif in self.store.motifs() {
            let shape = PlacementShape {
                width: motif.width,
                height: motif.height,
                scale_x: motif.scale_x,
                scale_y: motif.scale_y,
                rotation: motif.rotation,
            };
            let start = Point::new(motif.x, motif.y);
            match find_position(start, shape, &resolved, bounds, padding) {
                Some(pos) => {
                    resolved.push(shape.rect_at(pos));
                    if pos != start {
                        moves.push((motif.id, pos));
                    }
                }
                None => unplaced.push(motif.id),
            }
        }

        for (id, pos) in moves {
            self.store.set_position(&id, pos.x, pos.y);
        }

        if unplaced.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = unplaced.len(), "overlap resolution left motifs unplaced");
            Err(MotifError::MotifsCannotFit { unplaced })
        }
    }

    /// External gauge change: apply `target` to every motif, then resolve
    /// the overlaps the resize introduced, in one deterministic pass.
    pub fn resize_all_motifs(
        &mut self,
        target: (f64, f64),
        bounds: &Bounds,
    ) -> Result<(), MotifError> {
        let ids: Vec<MotifId> = self.store.motifs().iter().map(|m| m.id).collect();
        for id in &ids {
            self.update_motif_size(id, target, bounds)?;
        }
        self.resolve_overlaps(bounds)
    }

    // --- Drag / transform ---

    /// Per-frame drag clamp for `id` at the pointer-driven `pos`.
    /// Bounds-only and side-effect-free: authoritative state moves on
    /// commit, not here, so an abandoned gesture leaves no trace.
    #[must_use]
    pub fn drag_position(&self, id: &MotifId, pos: Point, bounds: &Bounds) -> Option<Point> {
        let motif = self.store.get(id)?;
        Some(clamp_to_bounds(pos, motif.scaled_width(), motif.scaled_height(), bounds))
    }

    /// Commit a drag or transform gesture.
    ///
    /// Applies the change (rotation only when enabled), clamps to bounds,
    /// and resolves any collision per the configured policy. Returns the
    /// position actually committed; the rendering surface adopts it when it
    /// differs from the drop point.
    pub fn commit_transform(
        &mut self,
        id: &MotifId,
        change: &PartialMotif,
        bounds: &Bounds,
    ) -> Result<Point, MotifError> {
        let Some(motif) = self.store.get(id) else {
            return Err(MotifError::UnknownMotif(*id));
        };

        let last_valid = Point::new(motif.x, motif.y);
        let scale_x = change.scale_x.unwrap_or(motif.scale_x);
        let scale_y = change.scale_y.unwrap_or(motif.scale_y);
        let rotation = if self.config.rotation_enabled {
            change.rotation.unwrap_or(motif.rotation)
        } else {
            motif.rotation
        };
        let dropped = Point::new(change.x.unwrap_or(motif.x), change.y.unwrap_or(motif.y));

        let shape = PlacementShape {
            width: motif.width,
            height: motif.height,
            scale_x,
            scale_y,
            rotation,
        };
        let others = self.obstacle_rects(Some(id));
        let pos = reconcile_drop(
            dropped,
            last_valid,
            shape,
            &others,
            bounds,
            self.config.collision_padding,
            self.config.drag_policy,
        );

        self.store.apply_partial(
            id,
            &PartialMotif {
                x: Some(pos.x),
                y: Some(pos.y),
                scale_x: Some(scale_x),
                scale_y: Some(scale_y),
                rotation: Some(rotation),
            },
        );
        Ok(pos)
    }

    // --- Internals ---

    /// Effective boxes of every motif except `excluding`, as search
    /// obstacles.
    fn obstacle_rects(&self, excluding: Option<&MotifId>) -> Vec<Rect> {
        self.store
            .motifs()
            .iter()
            .filter(|m| excluding != Some(&m.id))
            .map(Motif::rect)
            .collect()
    }
}

/// Resolve the bitmap for a new motif, trying `fallback` once when the
/// primary source fails.
fn resolve_image(
    loader: &mut dyn ImageLoader,
    source: &str,
    fallback: Option<&str>,
) -> Result<LoadedImage, MotifError> {
    match loader.load(source) {
        Ok(image) => Ok(image),
        Err(primary) => match fallback.filter(|f| *f != source) {
            Some(fallback) => {
                tracing::warn!(source, fallback, error = %primary, "primary motif image failed; trying fallback");
                Ok(loader.load(fallback)?)
            }
            None => Err(primary.into()),
        },
    }
}
