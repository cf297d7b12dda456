//! Compile result types

use crate::domain::entities::{CompileOutcome, RunSummary};

/// Result of a build run
#[derive(Debug, Clone, Default)]
pub struct CompileReport {
    /// Outcomes in manifest order (only entries that reached `Done`)
    pub outcomes: Vec<CompileOutcome>,
    /// Aggregated counts over `outcomes`
    pub summary: RunSummary,
    /// Number of entries in the manifest
    pub total: usize,
    /// Whether the run was stopped by the user
    pub interrupted: bool,
}

impl CompileReport {
    pub fn new(outcomes: Vec<CompileOutcome>, total: usize, interrupted: bool) -> Self {
        let summary = RunSummary::from_outcomes(&outcomes);
        Self {
            outcomes,
            summary,
            total,
            interrupted,
        }
    }

    /// Number of entries that reached a final outcome
    pub fn processed(&self) -> usize {
        self.outcomes.len()
    }

    /// True iff the run finished and every entry compiled
    pub fn is_success(&self) -> bool {
        !self.interrupted && self.processed() == self.total && self.summary.is_success()
    }

    /// Process exit code: 0 iff every entry compiled
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}
