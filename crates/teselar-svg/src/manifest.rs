//! Build manifest.
//!
//! A YAML file describing a multi-dataset report: which dataset files to
//! load, the button labels and ids, which dataset shows first, and where
//! the page goes.
//!
//! ```yaml
//! title: Treemap
//! initial: game
//! output: treemap.html
//! datasets:
//!   - key: game
//!     label: Video Game Data Set
//!     source: data/video-game-sales-data.json
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Report build manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Page heading.
    #[serde(default = "default_title")]
    pub title: String,
    /// Key of the dataset rendered first. Defaults to the first entry.
    #[serde(default)]
    pub initial: Option<String>,
    /// Output path for the generated page.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Datasets, in button order.
    pub datasets: Vec<DatasetRef>,
}

/// One dataset entry of a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRef {
    /// Switcher button id. Short identifier: ASCII letters, digits,
    /// hyphen, underscore.
    pub key: String,
    /// Switcher button label.
    pub label: String,
    /// Path of the dataset JSON file, relative to the working directory.
    pub source: PathBuf,
}

fn default_title() -> String {
    "Treemap".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("treemap.html")
}

impl Manifest {
    /// Parses and validates manifest YAML.
    pub fn parse(yaml: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_yaml_ng::from_str(yaml)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Reads and parses a manifest file.
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Key of the dataset rendered first.
    #[must_use]
    pub fn initial_key(&self) -> &str {
        self.initial
            .as_deref()
            .unwrap_or_else(|| self.datasets.first().map_or("", |d| d.key.as_str()))
    }

    fn validate(&self) -> Result<(), ManifestError> {
        if self.datasets.is_empty() {
            return Err(ManifestError::NoDatasets);
        }
        for (index, dataset) in self.datasets.iter().enumerate() {
            if dataset.key.is_empty()
                || !dataset
                    .key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            {
                return Err(ManifestError::InvalidKey {
                    key: dataset.key.clone(),
                });
            }
            if self.datasets[..index].iter().any(|d| d.key == dataset.key) {
                return Err(ManifestError::DuplicateKey {
                    key: dataset.key.clone(),
                });
            }
        }
        if let Some(initial) = &self.initial {
            if !self.datasets.iter().any(|d| &d.key == initial) {
                return Err(ManifestError::UnknownInitial {
                    key: initial.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Error loading or validating a manifest.
#[derive(Debug)]
pub enum ManifestError {
    /// The manifest file could not be read.
    Io(std::io::Error),
    /// The YAML did not parse into a manifest.
    Yaml(serde_yaml_ng::Error),
    /// The manifest listed no datasets.
    NoDatasets,
    /// A dataset key was empty or contained unsafe characters.
    InvalidKey { key: String },
    /// Two datasets shared a key.
    DuplicateKey { key: String },
    /// `initial` named a key that no dataset has.
    UnknownInitial { key: String },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read manifest: {err}"),
            Self::Yaml(err) => write!(f, "invalid manifest: {err}"),
            Self::NoDatasets => write!(f, "manifest lists no datasets"),
            Self::InvalidKey { key } => write!(f, "invalid dataset key '{key}'"),
            Self::DuplicateKey { key } => write!(f, "duplicate dataset key '{key}'"),
            Self::UnknownInitial { key } => {
                write!(f, "initial dataset '{key}' is not in the dataset list")
            }
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Yaml(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ManifestError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml_ng::Error> for ManifestError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::Yaml(err)
    }
}
