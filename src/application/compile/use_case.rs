//! Compile Use Case
//!
//! Carries every manifest entry through `Pending -> Decided -> Invoked -> Done`.

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Instant;

use rayon::prelude::*;

use crate::domain::entities::{CompileOutcome, QuestEntry};
use crate::domain::ports::{CompileEvent, CompileEventSink, CompilerRunner, Preprocessor, SourceTree};
use crate::domain::services::PreprocessDecisionEngine;
use crate::domain::value_objects::{first_line_excerpt, PreprocessStrategy, TIMEOUT_EXCERPT};

use super::options::CompileOptions;
use super::result::CompileReport;

/// Compile use case - compiles manifest entries with the external compiler
pub struct CompileUseCase<C, P, T>
where
    C: CompilerRunner,
    P: Preprocessor,
    T: SourceTree,
{
    compiler: C,
    preprocessor: P,
    tree: T,
    engine: PreprocessDecisionEngine,
}

impl<C, P, T> CompileUseCase<C, P, T>
where
    C: CompilerRunner,
    P: Preprocessor,
    T: SourceTree,
{
    pub fn new(compiler: C, preprocessor: P, tree: T, engine: PreprocessDecisionEngine) -> Self {
        Self {
            compiler,
            preprocessor,
            tree,
            engine,
        }
    }

    pub fn engine(&self) -> &PreprocessDecisionEngine {
        &self.engine
    }

    pub fn compiler(&self) -> &C {
        &self.compiler
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    /// Run the whole manifest.
    ///
    /// Per-entry failures become outcomes; the run never stops on one. When
    /// `interrupted` is set, no further entries are started and the report is
    /// marked interrupted.
    pub fn execute(
        &self,
        entries: &[QuestEntry],
        options: &CompileOptions,
        sink: &dyn CompileEventSink,
        interrupted: &AtomicBool,
    ) -> CompileReport {
        let total = entries.len();
        sink.on_event(CompileEvent::Started { total });

        self.prepare_output_dir();

        let outcomes = if options.is_parallel() {
            self.run_parallel(entries, options.jobs, sink, interrupted)
        } else {
            self.run_sequential(entries, sink, interrupted)
        };

        let stopped = outcomes.len() < total || interrupted.load(Ordering::SeqCst);
        let report = CompileReport::new(outcomes, total, stopped);

        if report.interrupted {
            sink.on_event(CompileEvent::Interrupted {
                processed: report.processed(),
                total,
                summary: report.summary.clone(),
            });
        } else {
            sink.on_event(CompileEvent::Completed {
                summary: report.summary.clone(),
            });
        }

        report
    }

    fn prepare_output_dir(&self) {
        if self.engine.strategy() == PreprocessStrategy::Off {
            return;
        }
        if let Err(e) = self.tree.ensure_dir(self.engine.preprocessed_dir()) {
            // Preprocessing will then fail per entry and fall back to originals.
            tracing::warn!(
                dir = %self.engine.preprocessed_dir().display(),
                error = %e,
                "could not create preprocessed output directory"
            );
        }
    }

    fn run_sequential(
        &self,
        entries: &[QuestEntry],
        sink: &dyn CompileEventSink,
        interrupted: &AtomicBool,
    ) -> Vec<CompileOutcome> {
        let total = entries.len();
        let mut outcomes = Vec::with_capacity(total);

        for (i, entry) in entries.iter().enumerate() {
            match self.process_entry(i + 1, total, entry, sink, interrupted) {
                Some(outcome) => outcomes.push(outcome),
                None => break,
            }
        }

        outcomes
    }

    fn run_parallel(
        &self,
        entries: &[QuestEntry],
        jobs: usize,
        sink: &dyn CompileEventSink,
        interrupted: &AtomicBool,
    ) -> Vec<CompileOutcome> {
        let pool = match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
            Ok(pool) => pool,
            Err(e) => {
                tracing::warn!(error = %e, "could not build worker pool, compiling sequentially");
                return self.run_sequential(entries, sink, interrupted);
            }
        };

        // Duplicate manifest entries write the same output paths.
        let locks: HashMap<&Path, Mutex<()>> = entries
            .iter()
            .map(|e| (e.relative_path(), Mutex::new(())))
            .collect();

        let total = entries.len();
        let results: Vec<Option<CompileOutcome>> = pool.install(|| {
            entries
                .par_iter()
                .enumerate()
                .map(|(i, entry)| {
                    let _guard = locks
                        .get(entry.relative_path())
                        .map(|lock| lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner()));
                    self.process_entry(i + 1, total, entry, sink, interrupted)
                })
                .collect()
        });

        // Keep the manifest-order prefix of finished entries.
        results.into_iter().map_while(|o| o).collect()
    }

    /// One entry from `Pending` to `Done`. Returns `None` if interrupted first.
    fn process_entry(
        &self,
        index: usize,
        total: usize,
        entry: &QuestEntry,
        sink: &dyn CompileEventSink,
        interrupted: &AtomicBool,
    ) -> Option<CompileOutcome> {
        if interrupted.load(Ordering::SeqCst) {
            return None;
        }

        sink.on_event(CompileEvent::EntryStarted {
            index,
            total,
            entry: entry.clone(),
        });

        let outcome = self.compile_entry(entry, interrupted)?;

        sink.on_event(CompileEvent::EntryFinished {
            index,
            total,
            outcome: outcome.clone(),
        });
        Some(outcome)
    }

    fn compile_entry(&self, entry: &QuestEntry, interrupted: &AtomicBool) -> Option<CompileOutcome> {
        if !self.tree.is_file(entry.relative_path()) {
            tracing::debug!(entry = %entry, "source missing, compiler not invoked");
            return Some(CompileOutcome::not_found(entry.clone()));
        }

        let decision = self
            .engine
            .decide(entry, &self.preprocessor, &self.tree);
        tracing::debug!(
            entry = %entry,
            required = decision.required(),
            source = %decision.source_path().display(),
            "preprocess decision"
        );

        let started = Instant::now();
        let result = self.compiler.run(decision.source_path(), interrupted);
        let elapsed = started.elapsed();

        let outcome = match result {
            Ok(out) if out.interrupted => return None,
            Ok(out) if out.timed_out => {
                CompileOutcome::failed(entry.clone(), decision, TIMEOUT_EXCERPT, elapsed)
            }
            Ok(out) if out.success() => CompileOutcome::compiled(entry.clone(), decision, elapsed),
            Ok(out) => CompileOutcome::failed(
                entry.clone(),
                decision,
                first_line_excerpt(&out.output),
                elapsed,
            ),
            Err(e) => CompileOutcome::failed(entry.clone(), decision, e.to_string(), elapsed),
        };
        Some(outcome)
    }
}
