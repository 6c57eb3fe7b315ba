//! Canvas frame: outer size, margins, caption band.

use serde::{Deserialize, Serialize};
use teselar_core::{Point, Rect, Size};

/// Margins around the tiled area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    /// Creates a margin set.
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margin {
    /// One pixel on three sides and a 177 px band at the bottom for the
    /// title and legend.
    fn default() -> Self {
        Self::new(1.0, 1.0, 177.0, 1.0)
    }
}

/// Overall canvas geometry.
///
/// The default is a 960×600 canvas whose margins leave a 958×422 tiling
/// area at the top and a caption band at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 600.0,
            margin: Margin::default(),
        }
    }
}

impl Frame {
    /// Creates a frame with the default margins.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Replaces the margins.
    #[must_use]
    pub const fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    /// Width of the tiling area.
    #[must_use]
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the tiling area.
    #[must_use]
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// Size of the tiling area.
    #[must_use]
    pub fn inner_size(&self) -> Size {
        Size::new(self.inner_width(), self.inner_height())
    }

    /// Top-left corner of the tiling area on the canvas.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point {
            x: self.margin.left,
            y: self.margin.top,
        }
    }

    /// The tiling area as a canvas rectangle.
    #[must_use]
    pub fn inner_rect(&self) -> Rect {
        Rect::new(
            self.margin.left,
            self.margin.top,
            self.inner_width(),
            self.inner_height(),
        )
    }

    /// Baseline anchor for the caption under the tiled area. On the default
    /// frame this is (1, 580).
    #[must_use]
    pub fn caption_anchor(&self) -> Point {
        Point::new(self.margin.left, self.height - 20.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_matches_reference_geometry() {
        let frame = Frame::default();
        assert_eq!(frame.inner_width(), 958.0);
        assert_eq!(frame.inner_height(), 422.0);
        assert_eq!(frame.origin(), Point::new(1.0, 1.0));
        assert_eq!(frame.inner_rect(), Rect::new(1.0, 1.0, 958.0, 422.0));
        assert_eq!(frame.caption_anchor(), Point::new(1.0, 580.0));
    }

    #[test]
    fn custom_margins() {
        let frame = Frame::new(100.0, 100.0).with_margin(Margin::new(10.0, 10.0, 40.0, 10.0));
        assert_eq!(frame.inner_size(), Size::new(80.0, 50.0));
        assert_eq!(frame.origin(), Point::new(10.0, 10.0));
    }
}
