//! Preprocessing decision engine
//!
//! Decides per entry whether the compiler receives the original file or a
//! preprocessed copy. A preprocessing failure never propagates: it downgrades
//! to compiling the original path.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::QuestEntry;
use crate::domain::ports::{Preprocessor, SourceTree};
use crate::domain::value_objects::{PreprocessDecision, PreprocessResult, PreprocessStrategy};

/// Decides which file variant to compile.
#[derive(Debug, Clone)]
pub struct PreprocessDecisionEngine {
    strategy: PreprocessStrategy,
    known_files: BTreeSet<String>,
    preprocessed_dir: PathBuf,
}

impl PreprocessDecisionEngine {
    /// `preprocessed_dir` is relative to the quest root.
    pub fn new<I, S>(strategy: PreprocessStrategy, known_files: I, preprocessed_dir: PathBuf) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strategy,
            known_files: known_files.into_iter().map(Into::into).collect(),
            preprocessed_dir,
        }
    }

    pub fn strategy(&self) -> PreprocessStrategy {
        self.strategy
    }

    pub fn preprocessed_dir(&self) -> &Path {
        &self.preprocessed_dir
    }

    /// Static classification: is this filename in the known-preprocess set?
    pub fn is_known(&self, file_name: &str) -> bool {
        self.known_files.contains(file_name)
    }

    /// Whether the preprocessor should be invoked for this entry at all
    pub fn is_candidate(&self, entry: &QuestEntry) -> bool {
        match self.strategy {
            PreprocessStrategy::List => self.is_known(entry.file_name()),
            PreprocessStrategy::Detect => true,
            PreprocessStrategy::Off => false,
        }
    }

    /// Decide for one entry, running the preprocessor when the strategy asks for it.
    ///
    /// Any copy left at the target by an earlier run is deleted first, so a
    /// `Transformed` answer is trusted only when this call wrote a readable
    /// copy. Otherwise the original path is compiled.
    pub fn decide<P, T>(&self, entry: &QuestEntry, preprocessor: &P, tree: &T) -> PreprocessDecision
    where
        P: Preprocessor + ?Sized,
        T: SourceTree + ?Sized,
    {
        if !self.is_candidate(entry) {
            return PreprocessDecision::original(entry);
        }

        let target = PreprocessDecision::preprocessed(entry, &self.preprocessed_dir);
        if let Err(e) = tree.remove_file(target.source_path()) {
            tracing::warn!(
                entry = %entry,
                path = %target.source_path().display(),
                error = %e,
                "cannot clear previous preprocessed copy, compiling original"
            );
            return PreprocessDecision::original(entry);
        }

        match preprocessor.preprocess(entry) {
            PreprocessResult::Transformed if tree.is_readable(target.source_path()) => {
                tracing::debug!(entry = %entry, "using preprocessed copy");
                target
            }
            PreprocessResult::Transformed => {
                tracing::warn!(
                    entry = %entry,
                    expected = %target.source_path().display(),
                    "preprocessor reported success but wrote no readable copy"
                );
                PreprocessDecision::original(entry)
            }
            PreprocessResult::NoDefinitions => PreprocessDecision::original(entry),
            PreprocessResult::Failed(reason) => {
                tracing::debug!(
                    entry = %entry,
                    preprocessor = preprocessor.name(),
                    %reason,
                    "preprocessing failed, compiling original"
                );
                PreprocessDecision::original(entry)
            }
        }
    }
}
