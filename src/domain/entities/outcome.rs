//! CompileOutcome entity - the result for one manifest entry

use std::path::Path;
use std::time::Duration;

use super::QuestEntry;
use crate::domain::value_objects::PreprocessDecision;

/// Final status of one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompileStatus {
    /// Compiler exited with status 0
    Compiled,
    /// Compiler failed, timed out or could not be invoked
    Failed,
    /// Source file did not exist; the compiler was never invoked
    NotFound,
}

impl CompileStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, CompileStatus::Compiled)
    }

    /// Stable name used in JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            CompileStatus::Compiled => "compiled",
            CompileStatus::Failed => "failed",
            CompileStatus::NotFound => "not_found",
        }
    }
}

impl std::fmt::Display for CompileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of carrying one entry through decision and invocation.
///
/// `excerpt` is only present when the status is not `Compiled`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOutcome {
    entry: QuestEntry,
    status: CompileStatus,
    excerpt: Option<String>,
    decision: Option<PreprocessDecision>,
    duration: Duration,
}

impl CompileOutcome {
    pub fn compiled(entry: QuestEntry, decision: PreprocessDecision, duration: Duration) -> Self {
        Self {
            entry,
            status: CompileStatus::Compiled,
            excerpt: None,
            decision: Some(decision),
            duration,
        }
    }

    pub fn failed(
        entry: QuestEntry,
        decision: PreprocessDecision,
        excerpt: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            entry,
            status: CompileStatus::Failed,
            excerpt: Some(excerpt.into()),
            decision: Some(decision),
            duration,
        }
    }

    pub fn not_found(entry: QuestEntry) -> Self {
        let excerpt = format!("File not found: {}", entry);
        Self {
            entry,
            status: CompileStatus::NotFound,
            excerpt: Some(excerpt),
            decision: None,
            duration: Duration::ZERO,
        }
    }

    pub fn entry(&self) -> &QuestEntry {
        &self.entry
    }

    pub fn status(&self) -> CompileStatus {
        self.status
    }

    pub fn excerpt(&self) -> Option<&str> {
        self.excerpt.as_deref()
    }

    /// Decision taken for this entry (`None` when the source was missing)
    pub fn decision(&self) -> Option<&PreprocessDecision> {
        self.decision.as_ref()
    }

    /// Path actually handed to the compiler
    pub fn source_path(&self) -> Option<&Path> {
        self.decision.as_ref().map(|d| d.source_path())
    }

    pub fn preprocessed(&self) -> bool {
        self.decision.as_ref().is_some_and(|d| d.required())
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
