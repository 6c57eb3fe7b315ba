//! Hierarchy construction: ids, aggregated values, sibling ordering.
//!
//! Builds an annotated tree from a [`DatasetNode`]:
//!
//! - every node gets a dot-joined `id` path, assigned pre-order over the
//!   input before any sorting, so ids are stable for a given file;
//! - leaf values are parsed strictly and internal values are the sum of
//!   their children, bottom-up;
//! - siblings are sorted by descending height, ties by descending value,
//!   recursively, which is what puts large groups first in the layout.

use crate::dataset::{DatasetNode, RawValue};
use std::cmp::Ordering;
use std::fmt;

/// A dataset node annotated with id, depth, height and aggregated value.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    /// Dot-joined path of names from the root, e.g. `Sales.Wii.Wii Sports`.
    pub id: String,
    pub name: String,
    /// Grouping category; present on leaves in the reference datasets.
    pub category: Option<String>,
    /// Distance from the root. The root has depth 0.
    pub depth: usize,
    /// Levels below this node. Leaves have height 0.
    pub height: usize,
    /// Own value for leaves, sum of children for internal nodes.
    pub value: f64,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Builds the annotated hierarchy for `data`.
    ///
    /// Fails when a leaf has no parseable value; values must be finite and
    /// non-negative. Internal nodes ignore any `value` field in the input
    /// and always aggregate their children.
    pub fn build(data: &DatasetNode) -> Result<Self, HierarchyError> {
        if data.children.as_ref().is_some_and(|c| c.is_empty()) && data.value.is_none() {
            return Err(HierarchyError::EmptyDataset);
        }
        let mut root = Self::from_dataset(data, None, 0)?;
        root.sort();
        Ok(root)
    }

    fn from_dataset(
        data: &DatasetNode,
        parent_id: Option<&str>,
        depth: usize,
    ) -> Result<Self, HierarchyError> {
        let id = parent_id.map_or_else(|| data.name.clone(), |p| format!("{p}.{}", data.name));
        if data.is_leaf() {
            let value = match &data.value {
                None => return Err(HierarchyError::MissingValue { id }),
                Some(raw) => match raw.as_f64() {
                    None => {
                        return Err(HierarchyError::InvalidValue {
                            id,
                            raw: raw_text(raw),
                        })
                    }
                    Some(v) if v < 0.0 => {
                        return Err(HierarchyError::NegativeValue { id, value: v })
                    }
                    Some(v) => v,
                },
            };
            return Ok(Self {
                id,
                name: data.name.clone(),
                category: data.category.clone(),
                depth,
                height: 0,
                value,
                children: Vec::new(),
            });
        }

        let inputs = data.children.as_deref().unwrap_or_default();
        let mut children = Vec::with_capacity(inputs.len());
        for child in inputs {
            children.push(Self::from_dataset(child, Some(&id), depth + 1)?);
        }
        let value = children.iter().map(|c| c.value).sum();
        let height = 1 + children.iter().map(|c| c.height).max().unwrap_or(0);
        Ok(Self {
            id,
            name: data.name.clone(),
            category: data.category.clone(),
            depth,
            height,
            value,
            children,
        })
    }

    /// Sorts every node's children by descending height, ties by descending
    /// value. The sort is stable, so equal siblings keep input order.
    fn sort(&mut self) {
        self.children.sort_by(|a, b| {
            b.height
                .cmp(&a.height)
                .then_with(|| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal))
        });
        for child in &mut self.children {
            child.sort();
        }
    }

    /// Whether this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Leaves in depth-first order of the sorted tree. This is the order
    /// tiles, categories and the legend derive from.
    #[must_use]
    pub fn leaves(&self) -> Vec<&Self> {
        let mut out = Vec::with_capacity(self.leaf_count());
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Self>) {
        if self.is_leaf() {
            out.push(self);
        } else {
            for child in &self.children {
                child.collect_leaves(out);
            }
        }
    }

    /// Total number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Self::node_count).sum::<usize>()
    }

    /// Number of leaves in this subtree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(Self::leaf_count).sum()
        }
    }

    /// Distinct leaf categories in first-encounter order over [`leaves`].
    /// Leaves without a category are grouped under an empty entry, the
    /// same grouping charts use for tile fills and the legend.
    ///
    /// [`leaves`]: Self::leaves
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for leaf in self.leaves() {
            let category = leaf.category.as_deref().unwrap_or_default();
            if !seen.iter().any(|s| s == category) {
                seen.push(category.to_string());
            }
        }
        seen
    }
}

fn raw_text(raw: &RawValue) -> String {
    match raw {
        RawValue::Number(n) => n.to_string(),
        RawValue::Text(s) => s.clone(),
    }
}

/// Error building a hierarchy from a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum HierarchyError {
    /// A leaf carried no value at all.
    MissingValue { id: String },
    /// A leaf value did not parse as a finite number.
    InvalidValue { id: String, raw: String },
    /// A leaf value was negative.
    NegativeValue { id: String, value: f64 },
    /// The root had neither children nor a value.
    EmptyDataset,
}

impl fmt::Display for HierarchyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue { id } => write!(f, "leaf '{id}' has no value"),
            Self::InvalidValue { id, raw } => {
                write!(f, "leaf '{id}' has unparseable value '{raw}'")
            }
            Self::NegativeValue { id, value } => {
                write!(f, "leaf '{id}' has negative value {value}")
            }
            Self::EmptyDataset => write!(f, "dataset root has no children and no value"),
        }
    }
}

impl std::error::Error for HierarchyError {}
