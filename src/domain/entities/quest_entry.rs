//! QuestEntry entity - one compilable quest file named by the manifest

use std::path::{Path, PathBuf};

/// A quest source file listed in the manifest.
///
/// The path is relative to the quest root. Duplicate manifest lines produce
/// distinct entries that are processed independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuestEntry {
    relative_path: PathBuf,
    /// 1-based manifest line number
    line: usize,
}

impl QuestEntry {
    /// Create a new entry
    pub fn new(relative_path: impl Into<PathBuf>, line: usize) -> Self {
        Self {
            relative_path: relative_path.into(),
            line,
        }
    }

    /// Parse a raw manifest line.
    ///
    /// Surrounding whitespace and carriage returns are stripped. Returns `None`
    /// for blank lines and `#` comments.
    pub fn from_manifest_line(raw: &str, line: usize) -> Option<Self> {
        let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '\r');
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        Some(Self::new(trimmed, line))
    }

    /// Path relative to the quest root
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Manifest line this entry came from
    pub fn line(&self) -> usize {
        self.line
    }

    /// File name component (used for known-preprocess membership)
    pub fn file_name(&self) -> &str {
        self.relative_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for QuestEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.relative_path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_line() {
        let entry = QuestEntry::from_manifest_line("a.quest", 1).unwrap();
        assert_eq!(entry.relative_path(), Path::new("a.quest"));
        assert_eq!(entry.line(), 1);
    }

    #[test]
    fn strips_whitespace_and_carriage_return() {
        let entry = QuestEntry::from_manifest_line("  dungeon/boss.quest \r", 4).unwrap();
        assert_eq!(entry.relative_path(), Path::new("dungeon/boss.quest"));
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert!(QuestEntry::from_manifest_line("", 1).is_none());
        assert!(QuestEntry::from_manifest_line("   \r", 2).is_none());
        assert!(QuestEntry::from_manifest_line("# comment", 3).is_none());
        assert!(QuestEntry::from_manifest_line("   # indented comment", 4).is_none());
    }

    #[test]
    fn file_name_ignores_directories() {
        let entry = QuestEntry::new("main/main_quest_lv60.quest", 1);
        assert_eq!(entry.file_name(), "main_quest_lv60.quest");
    }

    #[test]
    fn display_shows_relative_path() {
        let entry = QuestEntry::new("a/b.quest", 1);
        assert_eq!(entry.to_string(), "a/b.quest");
    }
}
