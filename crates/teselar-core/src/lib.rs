//! Core types for Teselar treemap reports.
//!
//! This crate provides the computation layer shared by the renderers:
//! - Input model: [`DatasetNode`] and [`parse_dataset`]
//! - Annotated trees: [`HierarchyNode`] with ids, sums and ordering
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Colors: [`Color`] with an ordinal [`OrdinalScale`] over [`CATEGORY_TEN`]
//! - Label formatting: [`split_label`]

mod color;
mod dataset;
mod geometry;
mod hierarchy;
mod label;
mod scale;

pub use color::{Color, ColorParseError};
pub use dataset::{parse_dataset, DatasetNode, RawValue};
pub use geometry::{Point, Rect, Size};
pub use hierarchy::{HierarchyError, HierarchyNode};
pub use label::split_label;
pub use scale::{OrdinalScale, CATEGORY_TEN};
