//! Process-backed compiler runner

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use crate::domain::ports::{CompilerRunner, InvocationError, RunOutput};
use crate::infrastructure::process::run_with_timeout;

/// Runs the external compiler as one subprocess per invocation.
///
/// The working directory is passed to the child explicitly; the current
/// process's directory is never changed.
#[derive(Debug, Clone)]
pub struct ProcessCompiler {
    program: PathBuf,
    args: Vec<String>,
    quest_root: PathBuf,
    timeout: Duration,
}

impl ProcessCompiler {
    pub fn new(program: impl Into<PathBuf>, quest_root: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            quest_root: quest_root.into(),
            timeout,
        }
    }

    /// Extra arguments placed before the source path
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl CompilerRunner for ProcessCompiler {
    fn run(&self, source_path: &Path, interrupted: &AtomicBool) -> Result<RunOutput, InvocationError> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args)
            .arg(source_path)
            .current_dir(&self.quest_root);

        tracing::debug!(
            program = %self.program.display(),
            source = %source_path.display(),
            "invoking compiler"
        );
        run_with_timeout(cmd, self.timeout, interrupted)
    }
}
