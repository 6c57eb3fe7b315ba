//! Hierarchical treemap layout.
//!
//! Tiles a [`HierarchyNode`] tree into a fixed area, recursing through
//! internal nodes with the squarified row builder and separating sibling
//! tiles with a configurable inner padding.

use crate::squarify::{squarify, GOLDEN_RATIO};
use serde::{Deserialize, Serialize};
use teselar_core::{HierarchyNode, Point, Rect, Size};
use tracing::info;

/// One laid-out leaf of a treemap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tile {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub value: f64,
    pub rect: Rect,
}

impl Tile {
    /// Left edge.
    #[must_use]
    pub fn x0(&self) -> f64 {
        self.rect.x
    }

    /// Top edge.
    #[must_use]
    pub fn y0(&self) -> f64 {
        self.rect.y
    }

    /// Right edge.
    #[must_use]
    pub fn x1(&self) -> f64 {
        self.rect.right()
    }

    /// Bottom edge.
    #[must_use]
    pub fn y1(&self) -> f64 {
        self.rect.bottom()
    }

    /// The same tile shifted by `offset`.
    #[must_use]
    pub fn offset(mut self, offset: Point) -> Self {
        self.rect = self.rect.translate(offset.x, offset.y);
        self
    }
}

/// Treemap layout configuration.
///
/// Defaults to the reference geometry: a 958×422 tiling area with a 1 px
/// inner padding between sibling tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreemapLayout {
    size: Size,
    padding_inner: f64,
    ratio: f64,
}

impl Default for TreemapLayout {
    fn default() -> Self {
        Self {
            size: Size::new(958.0, 422.0),
            padding_inner: 1.0,
            ratio: GOLDEN_RATIO,
        }
    }
}

impl TreemapLayout {
    /// Creates a layout for the given tiling area.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Sets the tiling area.
    #[must_use]
    pub const fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the gap between sibling tiles, applied at every level.
    #[must_use]
    pub const fn with_padding_inner(mut self, padding: f64) -> Self {
        self.padding_inner = padding;
        self
    }

    /// Sets the aspect-ratio target for row building.
    #[must_use]
    pub const fn with_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
    }

    /// Tiling area.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Lays out the leaves of `root`, in leaf order.
    ///
    /// Coordinates are relative to the tiling area's top-left corner; the
    /// caller applies any canvas offset.
    #[must_use]
    pub fn layout(&self, root: &HierarchyNode) -> Vec<Tile> {
        let mut tiles = Vec::with_capacity(root.leaf_count());
        let outer = Rect::new(0.0, 0.0, self.size.width, self.size.height);
        self.place(root, outer, &mut tiles);
        info!(tiles = tiles.len(), total = root.value, "treemap laid out");
        tiles
    }

    fn place(&self, node: &HierarchyNode, rect: Rect, out: &mut Vec<Tile>) {
        if node.is_leaf() {
            out.push(Tile {
                id: node.id.clone(),
                name: node.name.clone(),
                category: node.category.clone(),
                value: node.value,
                rect,
            });
            return;
        }
        // Children tile the node's rectangle grown by half the padding;
        // each child then gives the half back on every side. Siblings end
        // up separated by the full padding while boundary children stay
        // flush with the parent.
        let half = self.padding_inner / 2.0;
        let area = grow(rect, half);
        let values: Vec<f64> = node.children.iter().map(|c| c.value).collect();
        let slots = squarify(self.ratio, &values, area);
        for (child, slot) in node.children.iter().zip(slots) {
            self.place(child, shrink(slot, half), out);
        }
    }
}

fn grow(rect: Rect, amount: f64) -> Rect {
    Rect::from_corners(
        rect.x - amount,
        rect.y - amount,
        rect.right() + amount,
        rect.bottom() + amount,
    )
}

/// Insets `rect` by `amount` on every side. A side that would invert
/// collapses to its midpoint instead, so tiny tiles degrade to zero area
/// without going negative.
fn shrink(rect: Rect, amount: f64) -> Rect {
    let mut x0 = rect.x + amount;
    let mut x1 = rect.right() - amount;
    if x1 < x0 {
        let mid = (x0 + x1) / 2.0;
        x0 = mid;
        x1 = mid;
    }
    let mut y0 = rect.y + amount;
    let mut y1 = rect.bottom() - amount;
    if y1 < y0 {
        let mid = (y0 + y1) / 2.0;
        y0 = mid;
        y1 = mid;
    }
    Rect::from_corners(x0, y0, x1, y1)
}
