//! Configuration module for questc
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (QUESTC_*)
//! 3. Explicit `--config` file, or `<quest_root>/questc.toml`
//! 4. User config (~/.config/questc/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::ConfigWarning;
pub use types::{
    ColorMode, CompilerConfig, Config, OutputConfig, PathsConfig, PreprocessConfig,
    DEFAULT_KNOWN_FILES,
};
