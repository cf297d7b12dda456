//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::PreprocessStrategy;
use crate::error::QuestResult;

use super::loader::{self, ConfigWarning};

/// Quest files known to use `define` statements.
///
/// This is the single source of the static classification; the decision
/// engine and the `classify` command both read it through
/// `PreprocessConfig::known_files`.
pub const DEFAULT_KNOWN_FILES: &[&str] = &[
    "dragon_soul.quest",
    "dragon_soul_refine.quest",
    "dragon_soul_shop.quest",
    "dragon_soul_daily_gift.quest",
    "dragon_soul_daily_gift_mgr.quest",
    "flame_dungeon.quest",
    "event_flame_dungeon_open.quest",
    "main_quest_lv60.quest",
    "main_quest_lv66.quest",
    "main_quest_lv72.quest",
    "main_quest_lv78.quest",
    "main_quest_lv84.quest",
    "main_quest_lv90.quest",
    "main_quest_lv91.quest",
    "main_quest_lv92.quest",
    "main_quest_lv93.quest",
    "main_quest_lv94.quest",
    "main_quest_lv95.quest",
    "main_quest_lv96.quest",
    "main_quest_lv97.quest",
    "main_quest_lv98.quest",
    "main_quest_flame_lv99.quest",
    "main_quest_flame_lv100.quest",
    "main_quest_flame_lv101.quest",
    "main_quest_flame_lv102.quest",
    "main_quest_flame_lv103.quest",
    "main_quest_flame_lv104.quest",
    "main_quest_flame_lv105.quest",
];

/// Directory layout, relative to the quest root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_quest_root")]
    pub quest_root: PathBuf,

    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    #[serde(default = "default_preprocessed_dir")]
    pub preprocessed_dir: PathBuf,

    /// Written by the compiler itself; only reported
    #[serde(default = "default_object_dir")]
    pub object_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            quest_root: default_quest_root(),
            manifest: default_manifest(),
            preprocessed_dir: default_preprocessed_dir(),
            object_dir: default_object_dir(),
        }
    }
}

fn default_quest_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_manifest() -> PathBuf {
    PathBuf::from("locale_list")
}

fn default_preprocessed_dir() -> PathBuf {
    PathBuf::from("pre_qc")
}

fn default_object_dir() -> PathBuf {
    PathBuf::from("object")
}

/// External compiler configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerConfig {
    #[serde(default = "default_compiler_command")]
    pub command: String,

    /// Alternative locations tried (relative to the quest root) when `command` is not found
    #[serde(default = "default_compiler_fallbacks")]
    pub fallbacks: Vec<String>,

    /// Extra arguments placed before the source path
    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Parallel compiler processes (1 = sequential)
    #[serde(default = "default_jobs")]
    pub jobs: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            command: default_compiler_command(),
            fallbacks: default_compiler_fallbacks(),
            args: Vec::new(),
            timeout_secs: default_timeout_secs(),
            jobs: default_jobs(),
        }
    }
}

fn default_compiler_command() -> String {
    "qc".to_string()
}

fn default_compiler_fallbacks() -> Vec<String> {
    vec!["qc.exe".to_string(), "../../../bin/qc.exe".to_string()]
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_jobs() -> usize {
    1
}

/// Preprocessing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessConfig {
    #[serde(default)]
    pub strategy: PreprocessStrategy,

    /// Preprocessor command line; the quest path is appended
    #[serde(default = "default_preprocess_command")]
    pub command: Vec<String>,

    #[serde(default = "default_known_files")]
    pub known_files: Vec<String>,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            strategy: PreprocessStrategy::default(),
            command: default_preprocess_command(),
            known_files: default_known_files(),
        }
    }
}

fn default_preprocess_command() -> Vec<String> {
    vec!["python3".to_string(), "pre_qc.py".to_string()]
}

fn default_known_files() -> Vec<String> {
    DEFAULT_KNOWN_FILES.iter().map(|s| s.to_string()).collect()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,

    /// Failed entries listed in the final summary
    #[serde(default = "default_max_failures_shown")]
    pub max_failures_shown: usize,

    /// Excerpt width in the final summary
    #[serde(default = "default_excerpt_width")]
    pub excerpt_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
            max_failures_shown: default_max_failures_shown(),
            excerpt_width: default_excerpt_width(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_failures_shown() -> usize {
    10
}

fn default_excerpt_width() -> usize {
    80
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub compiler: CompilerConfig,

    #[serde(default)]
    pub preprocess: PreprocessConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Config file name looked up in the quest root
    pub const FILE_NAME: &'static str = "questc.toml";

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> QuestResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> QuestResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the quest root, the user config, or defaults
    pub fn resolve(
        explicit: Option<&Path>,
        quest_root: Option<&Path>,
    ) -> QuestResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit, quest_root)
    }

    /// Apply environment variable overrides (QUESTC_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Manifest path (absolute or relative to the working directory)
    pub fn manifest_path(&self) -> PathBuf {
        self.paths.quest_root.join(&self.paths.manifest)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.compiler.timeout_secs)
    }

    /// Worker count, never below one
    pub fn jobs(&self) -> usize {
        self.compiler.jobs.max(1)
    }
}
