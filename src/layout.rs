//! Garment display layout: scale physical garment dimensions onto the
//! canvas and derive the motif placement bounds.
//!
//! The engine's [`Bounds`] comes from here whenever gauge or garment size
//! changes: the garment is scaled uniformly into the container, centered,
//! and inset by the decorative border so motifs stay on the knittable body.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::bounds::Bounds;

/// Canvas container and garment scaling parameters.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    /// Canvas width in pixels.
    pub container_width: f64,
    /// Canvas height in pixels.
    pub container_height: f64,
    /// Blank margin kept around the garment, in pixels.
    pub margin: f64,
    /// Largest garment dimension the container must accommodate, in cm.
    pub max_garment_size: f64,
    /// Decorative border along the garment edge, in cm; motifs stay off it.
    pub border_inset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            container_width: 400.0,
            container_height: 500.0,
            margin: 20.0,
            max_garment_size: 140.0,
            border_inset: 5.0,
        }
    }
}

/// Where the garment lands on the canvas, and the region motifs may occupy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GarmentLayout {
    /// Garment width on the canvas, in pixels.
    pub display_width: f64,
    /// Garment height on the canvas, in pixels.
    pub display_height: f64,
    /// Left edge of the garment on the canvas.
    pub x: f64,
    /// Top edge of the garment on the canvas.
    pub y: f64,
    /// Placement region: the garment body minus the decorative border.
    pub bounds: Bounds,
}

impl LayoutConfig {
    /// Scale a `garment_width` × `garment_height` (cm) garment into the
    /// container, centered, and derive its placement bounds.
    #[must_use]
    pub fn layout(&self, garment_width: f64, garment_height: f64) -> GarmentLayout {
        let avail_w = self.container_width - self.margin * 2.0;
        let avail_h = self.container_height - self.margin * 2.0;

        let scale = (avail_w / self.max_garment_size).min(avail_h / self.max_garment_size);
        let display_width = garment_width * scale;
        let display_height = garment_height * scale;

        let x = self.margin + (avail_w - display_width) / 2.0;
        let y = self.margin + (avail_h - display_height) / 2.0;

        // Border width in display pixels; the scale is uniform, so one
        // inset serves both axes.
        let inset = self.border_inset * scale;

        GarmentLayout {
            display_width,
            display_height,
            x,
            y,
            bounds: Bounds::new(
                x + inset,
                y + inset,
                x + display_width - inset,
                y + display_height - inset,
            ),
        }
    }
}

/// Fallback placement region for the sweater template on the 400×400
/// stage.
#[must_use]
pub fn default_design_bounds() -> Bounds {
    Bounds::new(50.0, 50.0, 350.0, 350.0)
}
