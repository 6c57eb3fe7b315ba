//! Legend grid placement.
//!
//! Pure geometry: the renderer pairs these offsets with categories and
//! colors. Items flow left to right, wrapping into rows.

use serde::{Deserialize, Serialize};
use teselar_core::Point;

/// Legend grid configuration.
///
/// Defaults match the reference layout: a 500 px wide block anchored at
/// (600, 500) on the canvas, 15 px swatches in 120 px columns with 10 px
/// between rows, labels offset (3, −2) from the swatch corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendConfig {
    pub origin: Point,
    pub width: f64,
    pub swatch: f64,
    pub column_spacing: f64,
    pub row_spacing: f64,
    pub label_dx: f64,
    pub label_dy: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            origin: Point::new(600.0, 500.0),
            width: 500.0,
            swatch: 15.0,
            column_spacing: 120.0,
            row_spacing: 10.0,
            label_dx: 3.0,
            label_dy: -2.0,
        }
    }
}

impl LegendConfig {
    /// Moves the legend block.
    #[must_use]
    pub const fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the swatch edge length.
    #[must_use]
    pub const fn with_swatch(mut self, swatch: f64) -> Self {
        self.swatch = swatch;
        self
    }

    /// Sets the horizontal distance between item columns.
    #[must_use]
    pub const fn with_column_spacing(mut self, spacing: f64) -> Self {
        self.column_spacing = spacing;
        self
    }

    /// Sets the vertical gap between item rows.
    #[must_use]
    pub const fn with_row_spacing(mut self, spacing: f64) -> Self {
        self.row_spacing = spacing;
        self
    }

    /// Items per row: how many columns fit into the block width, at least
    /// one.
    #[must_use]
    pub fn items_per_row(&self) -> usize {
        let fit = (self.width / self.column_spacing).floor();
        if fit >= 1.0 { fit as usize } else { 1 }
    }

    /// Offset of item `index` within the legend block.
    #[must_use]
    pub fn slot(&self, index: usize) -> Point {
        let per_row = self.items_per_row();
        let column = (index % per_row) as f64;
        let row = (index / per_row) as f64;
        Point::new(
            column * self.column_spacing,
            row * self.swatch + row * self.row_spacing,
        )
    }

    /// Offset of an item's label from its slot.
    #[must_use]
    pub fn label_offset(&self) -> Point {
        Point::new(self.swatch + self.label_dx, self.swatch + self.label_dy)
    }
}
