//! Compile options

/// Options for one build run
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Number of entries compiled at once (1 = strictly sequential)
    pub jobs: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self { jobs: 1 }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the worker count; values below 1 are treated as 1
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.jobs > 1
    }
}
