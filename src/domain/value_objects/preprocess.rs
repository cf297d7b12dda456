//! Preprocessing value objects
//!
//! - `PreprocessStrategy`: how the decision engine picks entries to preprocess
//! - `PreprocessResult`: tagged answer from the external preprocessor
//! - `PreprocessDecision`: which file variant the compiler receives

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::QuestEntry;

/// Strategy used to decide whether an entry needs preprocessing
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PreprocessStrategy {
    /// Only filenames in the known-preprocess list are preprocessed
    #[default]
    List,
    /// Every entry is handed to the preprocessor, which inspects the contents
    Detect,
    /// Never preprocess
    Off,
}

impl PreprocessStrategy {
    /// Parse a strategy name (case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "list" | "static" => Some(Self::List),
            "detect" | "dynamic" => Some(Self::Detect),
            "off" | "none" => Some(Self::Off),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Detect => "detect",
            Self::Off => "off",
        }
    }
}

impl std::fmt::Display for PreprocessStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the external preprocessor reported for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreprocessResult {
    /// Definitions were found and a transformed copy was written
    Transformed,
    /// The file has no definitions; nothing was written
    NoDefinitions,
    /// The preprocessor itself failed
    Failed(String),
}

impl PreprocessResult {
    pub fn is_transformed(&self) -> bool {
        matches!(self, PreprocessResult::Transformed)
    }
}

/// Which variant of a quest file the compiler is given.
///
/// `source_path` is relative to the quest root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreprocessDecision {
    required: bool,
    source_path: PathBuf,
}

impl PreprocessDecision {
    /// Compile the original file
    pub fn original(entry: &QuestEntry) -> Self {
        Self {
            required: false,
            source_path: entry.relative_path().to_path_buf(),
        }
    }

    /// Compile the transformed copy under `preprocessed_dir`
    pub fn preprocessed(entry: &QuestEntry, preprocessed_dir: &Path) -> Self {
        Self {
            required: true,
            source_path: preprocessed_dir.join(entry.relative_path()),
        }
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }
}
