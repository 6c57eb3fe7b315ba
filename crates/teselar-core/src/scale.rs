//! Ordinal color assignment for categorical data.
//!
//! Categories receive palette entries in the order they are first seen, the
//! way categorical scales behave in the classic charting libraries. The
//! assignment is sticky: once a category has a color, every later query
//! returns the same color.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// The classic ten-color categorical palette.
pub const CATEGORY_TEN: [Color; 10] = [
    Color { r: 31.0 / 255.0, g: 119.0 / 255.0, b: 180.0 / 255.0, a: 1.0 }, // #1f77b4
    Color { r: 1.0, g: 127.0 / 255.0, b: 14.0 / 255.0, a: 1.0 },            // #ff7f0e
    Color { r: 44.0 / 255.0, g: 160.0 / 255.0, b: 44.0 / 255.0, a: 1.0 },  // #2ca02c
    Color { r: 214.0 / 255.0, g: 39.0 / 255.0, b: 40.0 / 255.0, a: 1.0 },  // #d62728
    Color { r: 148.0 / 255.0, g: 103.0 / 255.0, b: 189.0 / 255.0, a: 1.0 }, // #9467bd
    Color { r: 140.0 / 255.0, g: 86.0 / 255.0, b: 75.0 / 255.0, a: 1.0 },  // #8c564b
    Color { r: 227.0 / 255.0, g: 119.0 / 255.0, b: 194.0 / 255.0, a: 1.0 }, // #e377c2
    Color { r: 127.0 / 255.0, g: 127.0 / 255.0, b: 127.0 / 255.0, a: 1.0 }, // #7f7f7f
    Color { r: 188.0 / 255.0, g: 189.0 / 255.0, b: 34.0 / 255.0, a: 1.0 }, // #bcbd22
    Color { r: 23.0 / 255.0, g: 190.0 / 255.0, b: 207.0 / 255.0, a: 1.0 }, // #17becf
];

/// A first-seen ordinal mapping from category names to palette colors.
///
/// The palette wraps when more categories appear than it has entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdinalScale {
    palette: Vec<Color>,
    assigned: Vec<String>,
}

impl OrdinalScale {
    /// Creates a scale over `palette`. An empty palette falls back to
    /// [`CATEGORY_TEN`] so lookups always yield a color.
    #[must_use]
    pub fn new(palette: Vec<Color>) -> Self {
        let palette = if palette.is_empty() {
            CATEGORY_TEN.to_vec()
        } else {
            palette
        };
        Self {
            palette,
            assigned: Vec::new(),
        }
    }

    /// Creates a scale over the ten-color categorical palette.
    #[must_use]
    pub fn category_ten() -> Self {
        Self::new(CATEGORY_TEN.to_vec())
    }

    /// Color for `key`, assigning the next palette entry on first sight.
    pub fn color(&mut self, key: &str) -> Color {
        let index = match self.assigned.iter().position(|k| k == key) {
            Some(index) => index,
            None => {
                self.assigned.push(key.to_string());
                self.assigned.len() - 1
            }
        };
        self.palette[index % self.palette.len()]
    }

    /// Color for `key` without assigning, if the key has been seen.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Color> {
        self.assigned
            .iter()
            .position(|k| k == key)
            .map(|index| self.palette[index % self.palette.len()])
    }

    /// Keys in assignment order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.assigned
    }

    /// Number of assigned keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    /// Whether no key has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

impl Default for OrdinalScale {
    fn default() -> Self {
        Self::category_ten()
    }
}
