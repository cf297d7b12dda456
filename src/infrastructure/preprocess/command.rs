//! Command-backed preprocessor
//!
//! Invocation contract: `<command...> <quest path>` run in the quest root,
//! with `QUESTC_PREPROCESSED_DIR` naming the output directory.
//!
//! | exit code | meaning                                   |
//! |-----------|-------------------------------------------|
//! | 0         | definitions found, transformed copy written |
//! | 1         | no definitions, nothing written           |
//! | other     | preprocessor failure                      |

use std::path::PathBuf;
use std::process::Command;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use crate::domain::entities::QuestEntry;
use crate::domain::ports::Preprocessor;
use crate::domain::value_objects::{first_line_excerpt, PreprocessResult};
use crate::infrastructure::process::run_with_timeout;

/// Runs an external preprocessor command per entry
#[derive(Debug, Clone)]
pub struct CommandPreprocessor {
    command: Vec<String>,
    quest_root: PathBuf,
    preprocessed_dir: PathBuf,
    timeout: Duration,
}

impl CommandPreprocessor {
    /// Returns `None` when `command` is empty.
    pub fn new(
        command: Vec<String>,
        quest_root: impl Into<PathBuf>,
        preprocessed_dir: impl Into<PathBuf>,
        timeout: Duration,
    ) -> Option<Self> {
        if command.is_empty() {
            return None;
        }
        Some(Self {
            command,
            quest_root: quest_root.into(),
            preprocessed_dir: preprocessed_dir.into(),
            timeout,
        })
    }
}

impl Preprocessor for CommandPreprocessor {
    fn name(&self) -> &'static str {
        "command"
    }

    fn preprocess(&self, entry: &QuestEntry) -> PreprocessResult {
        let (program, args) = match self.command.split_first() {
            Some(parts) => parts,
            None => return PreprocessResult::Failed("empty preprocessor command".to_string()),
        };

        let mut cmd = Command::new(program);
        cmd.args(args)
            .arg(entry.relative_path())
            .current_dir(&self.quest_root)
            .env("QUESTC_PREPROCESSED_DIR", &self.preprocessed_dir);

        // Preprocessing is not interruptible on its own; the timeout bounds it.
        let never = AtomicBool::new(false);
        match run_with_timeout(cmd, self.timeout, &never) {
            Ok(out) if out.timed_out => PreprocessResult::Failed("preprocessor timeout".to_string()),
            Ok(out) => match out.exit_code {
                Some(0) => PreprocessResult::Transformed,
                Some(1) => PreprocessResult::NoDefinitions,
                _ => PreprocessResult::Failed(first_line_excerpt(&out.output)),
            },
            Err(e) => PreprocessResult::Failed(e.to_string()),
        }
    }
}

/// Stand-in used when no preprocessor command is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledPreprocessor;

impl Preprocessor for DisabledPreprocessor {
    fn name(&self) -> &'static str {
        "disabled"
    }

    fn preprocess(&self, _entry: &QuestEntry) -> PreprocessResult {
        PreprocessResult::Failed("no preprocessor command configured".to_string())
    }
}
