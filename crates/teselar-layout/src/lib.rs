//! Squarified treemap layout for Teselar.
//!
//! Turns an annotated hierarchy into positioned leaf tiles:
//!
//! - [`TreemapLayout`] tiles a [`teselar_core::HierarchyNode`] into a fixed
//!   area with inner padding between siblings
//! - [`Frame`] describes the surrounding canvas and its margins
//! - [`LegendConfig`] places the category legend grid

mod frame;
mod legend;
mod squarify;
mod treemap;

pub use frame::{Frame, Margin};
pub use legend::LegendConfig;
pub use squarify::GOLDEN_RATIO;
pub use treemap::{Tile, TreemapLayout};
