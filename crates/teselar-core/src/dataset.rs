//! Input dataset model.
//!
//! Mirrors the JSON shape of the reference datasets: a nested tree of named
//! nodes where leaves carry a grouping category and a value. The reference
//! files encode values as decimal strings, so the value field accepts both
//! string and numeric forms.

use serde::{Deserialize, Serialize};

/// One node of an input dataset tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DatasetNode>>,
}

/// A leaf value as it appears in source JSON: a bare number or a decimal
/// string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Numeric interpretation, if the value is a finite number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Number(_) => None,
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }
}

impl DatasetNode {
    /// Creates an internal node.
    #[must_use]
    pub fn branch(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            category: None,
            value: None,
            children: Some(children),
        }
    }

    /// Creates a leaf node.
    #[must_use]
    pub fn leaf(name: impl Into<String>, category: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            category: Some(category.into()),
            value: Some(RawValue::Number(value)),
            children: None,
        }
    }

    /// A node is a leaf when it has no children. An empty `children` array
    /// counts as no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.as_ref().map_or(true, |c| c.is_empty())
    }
}

/// Parses a dataset from JSON text.
pub fn parse_dataset(json: &str) -> Result<DatasetNode, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reference_shape() {
        let json = r#"{
            "name": "Video Game Sales",
            "children": [
                {
                    "name": "Wii",
                    "children": [
                        { "name": "Wii Sports", "category": "Wii", "value": "82.53" },
                        { "name": "Wii Play", "category": "Wii", "value": 28.92 }
                    ]
                }
            ]
        }"#;
        let root = parse_dataset(json).unwrap();
        assert_eq!(root.name, "Video Game Sales");
        assert!(!root.is_leaf());
        let platform = &root.children.as_ref().unwrap()[0];
        let games = platform.children.as_ref().unwrap();
        assert_eq!(games[0].value.as_ref().unwrap().as_f64(), Some(82.53));
        assert_eq!(games[1].value.as_ref().unwrap().as_f64(), Some(28.92));
        assert_eq!(games[0].category.as_deref(), Some("Wii"));
    }

    #[test]
    fn empty_children_is_leaf() {
        let json = r#"{ "name": "stub", "children": [] }"#;
        let node = parse_dataset(json).unwrap();
        assert!(node.is_leaf());
    }

    #[test]
    fn raw_value_parses_trimmed_strings() {
        assert_eq!(RawValue::Text(" 12.5 ".to_string()).as_f64(), Some(12.5));
        assert_eq!(RawValue::Text("2335345.5999999996".to_string()).as_f64(), Some(2_335_345.599_999_999_6));
        assert_eq!(RawValue::Text("12,5".to_string()).as_f64(), None);
        assert_eq!(RawValue::Text("inf".to_string()).as_f64(), None);
        assert_eq!(RawValue::Number(f64::NAN).as_f64(), None);
    }

    #[test]
    fn constructors_round_trip() {
        let tree = DatasetNode::branch(
            "root",
            vec![DatasetNode::leaf("a", "cat", 1.0), DatasetNode::leaf("b", "cat", 2.0)],
        );
        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(parse_dataset(&json).unwrap(), tree);
        // Absent fields are omitted, not serialized as null.
        assert!(!json.contains("null"));
    }
}
