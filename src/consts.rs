//! Shared numeric constants for the placement engine.

// ── Collision ───────────────────────────────────────────────────

/// Margin shaved off every side of a motif's box before collision tests.
pub const DEFAULT_COLLISION_PADDING: f64 = 15.0;

// ── Spiral search ───────────────────────────────────────────────

/// Distance between probes on the spiral walk, in canvas units.
pub const SEARCH_STEP_SIZE: f64 = 10.0;

/// Probe budget before the search reports failure.
pub const MAX_SEARCH_STEPS: usize = 300;

// ── Motifs ──────────────────────────────────────────────────────

/// Default ceiling on simultaneously placed motifs.
pub const DEFAULT_MAX_MOTIFS: usize = 4;

/// Canvas units per stitch when deriving the display-only stitch grid.
pub const DEFAULT_STITCH_SIZE: f64 = 4.0;

/// Seed offset on both axes when placing a duplicate next to its source.
pub const DUPLICATE_OFFSET: f64 = 20.0;

/// New motifs default to this fraction of the smaller bounds dimension.
pub const DEFAULT_SIZE_RATIO: f64 = 1.0 / 3.0;
