//! Common test utilities for questc CLI and scenario tests.
//!
//! - `QuestEnv`: an isolated quest root with a fake compiler and preprocessor
//! - `TestResult`: captured output of one CLI run

#![allow(dead_code)]

pub mod fixtures;

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub use fixtures::*;

/// Result of running the questc binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Parsed NDJSON lines of stdout
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad JSON line {l:?}: {e}")))
            .collect()
    }
}

/// Isolated quest root.
///
/// `questc.toml` points the compiler at `fake_qc.sh` and the preprocessor
/// at `fake_pre.sh`, both run through `sh`. Every compiler invocation is
/// appended to `invocations.log`.
pub struct QuestEnv {
    pub root: TempDir,
    home: TempDir,
}

impl QuestEnv {
    pub fn new() -> Self {
        let env = Self {
            root: TempDir::new().expect("Failed to create quest root"),
            home: TempDir::new().expect("Failed to create home"),
        };
        env.write("fake_qc.sh", FAKE_COMPILER);
        env.write("fake_pre.sh", FAKE_PREPROCESSOR);
        env.write("questc.toml", BASE_CONFIG);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full, content).expect("Failed to write file");
    }

    /// Write `locale_list` with one entry per line
    pub fn write_manifest(&self, lines: &[&str]) {
        let mut content = lines.join("\n");
        content.push('\n');
        self.write("locale_list", &content);
    }

    /// Source paths the fake compiler was invoked with, in order
    pub fn invocations(&self) -> Vec<String> {
        std::fs::read_to_string(self.path("invocations.log"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Run questc with the quest root as working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_questc"));
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.home.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("RUST_LOG");
        for key in QUESTC_ENV_KEYS {
            cmd.env_remove(key);
        }

        TestResult::from_output(cmd.output().expect("Failed to execute questc"))
    }
}

impl Default for QuestEnv {
    fn default() -> Self {
        Self::new()
    }
}
