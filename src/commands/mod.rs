//! Command handlers
//!
//! Handlers return the process exit code. Fatal errors bubble up as
//! `anyhow::Error` and are rendered by `main`.

pub mod build;
pub mod classify;
pub mod plan;

use std::path::{Path, PathBuf};

use anyhow::Result;

use questc::config::Config;
use questc::presentation::cli::{Cli, ColorWhen};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Flags every subcommand inherits
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub json: bool,
    pub color: Option<ColorWhen>,
    pub config: Option<PathBuf>,
    pub quest_root: Option<PathBuf>,
}

impl GlobalArgs {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            json: cli.json,
            color: cli.color,
            config: cli.config.clone(),
            quest_root: cli.quest_root.clone(),
        }
    }
}

/// Resolved configuration plus the rendering context derived from it
pub struct Session {
    pub config: Config,
    pub ui: UiContext,
}

/// Resolve configuration and report unknown keys.
///
/// `-C` selects where `questc.toml` is looked up and always wins over the
/// `paths.quest_root` found in files or the environment.
pub fn open_session(global: &GlobalArgs) -> Result<Session> {
    let search_root = global
        .quest_root
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let (mut config, warnings) = Config::resolve(global.config.as_deref(), Some(&search_root))?;

    if let Some(root) = &global.quest_root {
        config.paths.quest_root = root.clone();
    }

    let ui = UiContext::new(global.json, global.color, &config);

    for warning in &warnings {
        tracing::debug!(key = %warning.key, file = %warning.file.display(), "unknown config key");
        if !ui.json {
            eprintln!(
                "{} {}",
                Icon::Warning.colored(ui.color, ui.unicode),
                ColoredText::warning(warning.to_string()).render(ui.color)
            );
        }
    }

    tracing::info!(
        quest_root = %config.paths.quest_root.display(),
        manifest = %config.manifest_path().display(),
        strategy = %config.preprocess.strategy,
        timeout_secs = config.compiler.timeout_secs,
        "resolved configuration"
    );

    Ok(Session { config, ui })
}

/// A `--manifest` flag names a path relative to the working directory, not
/// the quest root.
pub fn override_manifest(config: &mut Config, manifest: Option<&Path>) -> Result<()> {
    if let Some(path) = manifest {
        config.paths.manifest = std::path::absolute(path)?;
    }
    Ok(())
}
