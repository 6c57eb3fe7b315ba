//! SVG and HTML rendering for Teselar treemap reports.
//!
//! - [`Chart`] lays a hierarchy out and serializes it as an `<svg>` scene
//! - [`Page`] wraps charts into a standalone interactive HTML document
//! - [`Manifest`] describes a multi-dataset report build

mod chart;
mod manifest;
mod page;

pub use chart::Chart;
pub use manifest::{DatasetRef, Manifest, ManifestError};
pub use page::{Page, Panel};
