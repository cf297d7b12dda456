//! Compile Event Port
//!
//! Observable progress of a build run. Enables console progress,
//! NDJSON event streams and silent operation.

use crate::domain::entities::{CompileOutcome, QuestEntry, RunSummary};

/// Event emitted during a build run
#[derive(Debug, Clone)]
pub enum CompileEvent {
    /// Manifest loaded, run starting
    Started { total: usize },

    /// Entry is about to be processed (1-based index)
    EntryStarted {
        index: usize,
        total: usize,
        entry: QuestEntry,
    },

    /// Entry reached its final outcome
    EntryFinished {
        index: usize,
        total: usize,
        outcome: CompileOutcome,
    },

    /// Run stopped early by user interrupt; `summary` covers the finished prefix
    Interrupted {
        processed: usize,
        total: usize,
        summary: RunSummary,
    },

    /// Run completed (all entries attempted)
    Completed { summary: RunSummary },
}

/// Trait for receiving compile events
pub trait CompileEventSink: Send + Sync {
    fn on_event(&self, event: CompileEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl CompileEventSink for NoopEventSink {
    fn on_event(&self, _event: CompileEvent) {}
}
