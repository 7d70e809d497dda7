//! Motif placement and collision-resolution engine for a garment canvas.
//!
//! The crate keeps every decorative motif placed on a garment template
//! geometrically valid — fully inside the knittable body and clear of every
//! other motif by a breathing-room padding — as the user adds, duplicates,
//! drags, and deletes motifs, and as external gauge changes resize them all
//! at once. The rendering surface, async image decoding, gauge arithmetic,
//! and UI chrome live in host code: the engine consumes drag deltas,
//! decoded-image dimensions, and a placement [`bounds::Bounds`], and hands
//! back corrected positions and typed errors.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`manager`] | Motif lifecycle operations and the owned document |
//! | [`motif`] | Motif entities, sparse updates, and the versioned store |
//! | [`placement`] | Spiral search for the nearest valid position |
//! | [`drag`] | Per-frame drag clamp and drag-end reconciliation |
//! | [`geometry`] | Rectangle intersection tests (axis-aligned and SAT) |
//! | [`bounds`] | The rectangular placement region |
//! | [`layout`] | Garment display scaling and bounds derivation |
//! | [`image`] | Opaque image handles and the host loader seam |
//! | [`consts`] | Shared numeric constants (padding, search budget, ceilings) |

pub mod bounds;
pub mod consts;
pub mod drag;
pub mod geometry;
pub mod image;
pub mod layout;
pub mod manager;
pub mod motif;
pub mod placement;
