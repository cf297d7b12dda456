//! RunSummary - aggregated result of a whole run

use super::{CompileOutcome, QuestEntry};

/// A failed entry with its diagnostic excerpt, in manifest order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedEntry {
    pub entry: QuestEntry,
    pub excerpt: Option<String>,
}

/// Summary computed once from the full ordered outcome sequence.
///
/// Invariant: `total == compiled_count + failed_count`. `NotFound` counts as
/// failed. `failed_entries` is never truncated here; presentation clips it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub compiled_count: usize,
    pub failed_count: usize,
    pub failed_entries: Vec<FailedEntry>,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[CompileOutcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            summary.record(outcome);
        }
        summary
    }

    fn record(&mut self, outcome: &CompileOutcome) {
        self.total += 1;
        if outcome.is_success() {
            self.compiled_count += 1;
        } else {
            self.failed_count += 1;
            self.failed_entries.push(FailedEntry {
                entry: outcome.entry().clone(),
                excerpt: outcome.excerpt().map(str::to_string),
            });
        }
    }

    /// True when every processed entry compiled
    pub fn is_success(&self) -> bool {
        self.failed_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::PreprocessDecision;
    use std::time::Duration;

    fn ok(path: &str, line: usize) -> CompileOutcome {
        let entry = QuestEntry::new(path, line);
        let decision = PreprocessDecision::original(&entry);
        CompileOutcome::compiled(entry, decision, Duration::ZERO)
    }

    fn fail(path: &str, line: usize, msg: &str) -> CompileOutcome {
        let entry = QuestEntry::new(path, line);
        let decision = PreprocessDecision::original(&entry);
        CompileOutcome::failed(entry, decision, msg, Duration::ZERO)
    }

    #[test]
    fn empty_run_is_success() {
        let summary = RunSummary::from_outcomes(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.is_success());
    }

    #[test]
    fn counts_add_up_and_not_found_is_failure() {
        let outcomes = vec![
            ok("a.quest", 1),
            CompileOutcome::not_found(QuestEntry::new("b.quest", 2)),
            fail("c.quest", 3, "bad token"),
            ok("d.quest", 4),
        ];
        let summary = RunSummary::from_outcomes(&outcomes);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.compiled_count, 2);
        assert_eq!(summary.failed_count, 2);
        assert_eq!(summary.total, summary.compiled_count + summary.failed_count);
        assert!(!summary.is_success());
    }

    #[test]
    fn failed_entries_keep_manifest_order() {
        let outcomes = vec![
            fail("z.quest", 1, "first"),
            ok("a.quest", 2),
            fail("m.quest", 3, "second"),
        ];
        let summary = RunSummary::from_outcomes(&outcomes);
        let names: Vec<String> = summary
            .failed_entries
            .iter()
            .map(|f| f.entry.to_string())
            .collect();
        assert_eq!(names, vec!["z.quest", "m.quest"]);
        assert_eq!(summary.failed_entries[1].excerpt.as_deref(), Some("second"));
    }

    #[test]
    fn one_of_five_failing() {
        let outcomes = vec![
            ok("1.quest", 1),
            ok("2.quest", 2),
            fail("3.quest", 3, "oops"),
            ok("4.quest", 4),
            ok("5.quest", 5),
        ];
        let summary = RunSummary::from_outcomes(&outcomes);
        assert_eq!(summary.compiled_count, 4);
        assert_eq!(summary.failed_entries.len(), 1);
        assert_eq!(summary.failed_entries[0].entry.line(), 3);
    }
}
