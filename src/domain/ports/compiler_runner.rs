//! CompilerRunner port - one isolated external compiler invocation

use std::path::Path;
use std::sync::atomic::AtomicBool;

use thiserror::Error;

/// Captured result of a compiler process that was started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    /// Exit code (`None` if killed by a signal)
    pub exit_code: Option<i32>,
    /// Stdout followed by stderr
    pub output: String,
    /// Process was killed after exceeding the timeout
    pub timed_out: bool,
    /// Process was killed because the run was interrupted
    pub interrupted: bool,
}

impl RunOutput {
    pub fn after_timeout() -> Self {
        Self {
            timed_out: true,
            ..Self::default()
        }
    }

    pub fn after_interrupt() -> Self {
        Self {
            interrupted: true,
            ..Self::default()
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0) && !self.timed_out && !self.interrupted
    }
}

/// The compiler could not be run at all
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("failed to start compiler '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to wait for compiler: {0}")]
    Wait(#[source] std::io::Error),
}

/// Runs the external compiler on one source path.
///
/// `source_path` is relative to the quest root and is passed as the only
/// positional argument. Implementations must enforce their timeout and
/// must kill the process when `interrupted` becomes true.
pub trait CompilerRunner: Send + Sync {
    fn run(&self, source_path: &Path, interrupted: &AtomicBool) -> Result<RunOutput, InvocationError>;
}
