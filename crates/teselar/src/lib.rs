//! Teselar: squarified treemap reports as standalone SVG/HTML.
//!
//! The pipeline is a pure computation stage followed by markup generation:
//! parse a dataset tree, build the annotated hierarchy, tile its leaves,
//! then serialize charts and pages.
//!
//! ```
//! use teselar::{Chart, DatasetNode, HierarchyNode, Page};
//!
//! let data = DatasetNode::branch(
//!     "Sales",
//!     vec![
//!         DatasetNode::leaf("Wii Sports", "Wii", 82.53),
//!         DatasetNode::leaf("Grand Theft Auto V", "PS3", 21.08),
//!     ],
//! );
//! let root = HierarchyNode::build(&data).expect("leaves carry values");
//! let page = Page::new("Treemap").with_panel("sales", "Sales", Chart::build(&root));
//! assert!(page.to_html().contains("data-name=\"Wii Sports\""));
//! ```

pub use teselar_core::{
    parse_dataset, split_label, Color, ColorParseError, DatasetNode, HierarchyError,
    HierarchyNode, OrdinalScale, Point, RawValue, Rect, Size, CATEGORY_TEN,
};
pub use teselar_layout::{Frame, LegendConfig, Margin, Tile, TreemapLayout, GOLDEN_RATIO};
pub use teselar_svg::{Chart, DatasetRef, Manifest, ManifestError, Page, Panel};

pub use teselar_layout as layout;
pub use teselar_svg as svg;
