//! Geometric primitives for treemap layout.
//!
//! All coordinates are `f64` in canvas pixel space: origin at the top left,
//! y growing downward, matching the SVG coordinate system the renderers
//! emit into.

use serde::{Deserialize, Serialize};

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin (0, 0).
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// A zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area covered by this size.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// An axis-aligned rectangle, stored as origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle from two corners. The corners must be ordered:
    /// `x1 >= x0` and `y1 >= y0`.
    #[must_use]
    pub fn from_corners(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// Right edge (`x + width`).
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Top-left corner.
    #[must_use]
    pub const fn origin(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    /// Width/height as a [`Size`].
    #[must_use]
    pub const fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Area of the rectangle.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// The same rectangle shifted by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// Whether `point` lies inside the rectangle (edges included).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Whether the interiors of two rectangles overlap. Rectangles that
    /// only share an edge do not intersect, and zero-area rectangles never
    /// intersect anything.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && other.width > 0.0
            && other.height > 0.0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_new() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(p.x, 3.0);
        assert_eq!(p.y, 4.0);
        assert_eq!(Point::ORIGIN, Point::new(0.0, 0.0));
    }

    #[test]
    fn size_area() {
        assert_eq!(Size::new(958.0, 422.0).area(), 404_276.0);
        assert_eq!(Size::ZERO.area(), 0.0);
    }

    #[test]
    fn rect_from_corners() {
        let r = Rect::from_corners(1.0, 2.0, 5.0, 10.0);
        assert_eq!(r.x, 1.0);
        assert_eq!(r.y, 2.0);
        assert_eq!(r.width, 4.0);
        assert_eq!(r.height, 8.0);
        assert_eq!(r.right(), 5.0);
        assert_eq!(r.bottom(), 10.0);
    }

    #[test]
    fn rect_translate() {
        let r = Rect::new(0.0, 0.0, 10.0, 20.0).translate(1.0, 1.0);
        assert_eq!(r, Rect::new(1.0, 1.0, 10.0, 20.0));
    }

    #[test]
    fn rect_contains_edges() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(!r.contains(Point::new(10.01, 5.0)));
    }

    #[test]
    fn rect_intersects_interior_only() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        // Shared edge is not an overlap.
        assert!(!a.intersects(&c));
        // Degenerate rectangles have no interior, even strictly inside
        // another rectangle.
        let z = Rect::new(5.0, 5.0, 0.0, 0.0);
        let line = Rect::new(5.0, 1.0, 0.0, 8.0);
        assert!(!a.intersects(&z));
        assert!(!z.intersects(&a));
        assert!(!a.intersects(&line));
        assert!(!line.intersects(&a));
    }
}
