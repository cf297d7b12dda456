//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::PreprocessStrategy;
use crate::error::{QuestError, QuestResult};

use super::types::Config;

/// Key in a config file that no setting reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl ConfigWarning {
    /// `dotted` is the path serde_ignored reports, e.g. `output.excerpt_widht`.
    fn unknown_key(file: &Path, content: &str, dotted: &str) -> Self {
        let key = dotted.rsplit('.').next().unwrap_or(dotted).to_string();
        Self {
            line: content
                .lines()
                .position(|l| l.contains(key.as_str()))
                .map(|i| i + 1),
            suggestion: closest_key(&key).map(str::to_string),
            file: file.to_path_buf(),
            key,
        }
    }
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        match (self.line, &self.suggestion) {
            (Some(line), Some(hint)) => write!(f, ":{line} (did you mean '{hint}'?)"),
            (Some(line), None) => write!(f, ":{line}"),
            (None, Some(hint)) => write!(f, " (did you mean '{hint}'?)"),
            (None, None) => Ok(()),
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// A relative `paths.quest_root` is resolved against the config file's directory.
pub fn load_with_warnings(path: &Path) -> QuestResult<(Config, Vec<ConfigWarning>)> {
    let (mut config, warnings) = parse_file(path)?;
    if let Some(dir) = path.parent() {
        config.paths.quest_root = dir.join(&config.paths.quest_root);
    }
    Ok((config, warnings))
}

fn parse_file(path: &Path) -> QuestResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut ignored = Vec::new();
    let config: Config =
        serde_ignored::deserialize(toml::de::Deserializer::new(&content), |key| {
            ignored.push(key.to_string());
        })
        .map_err(|e| QuestError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if config.compiler.timeout_secs == 0 {
        return Err(QuestError::InvalidConfig {
            file: path.to_path_buf(),
            message: "compiler.timeout_secs must be at least 1".to_string(),
        });
    }

    let warnings = ignored
        .iter()
        .map(|dotted| ConfigWarning::unknown_key(path, &content, dotted))
        .collect();
    Ok((config, warnings))
}

/// Resolve configuration by priority: explicit file, quest root, user config, defaults.
///
/// An explicit file must exist and parse. Implicit files that fail to parse
/// are logged and skipped.
pub fn resolve(
    explicit: Option<&Path>,
    quest_root: Option<&Path>,
) -> QuestResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(QuestError::InvalidConfig {
                file: path.to_path_buf(),
                message: "file not found".to_string(),
            });
        }
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    if let Some(root) = quest_root {
        let project_config = root.join(Config::FILE_NAME);
        if project_config.is_file() {
            match load_with_warnings(&project_config) {
                Ok((config, warnings)) => {
                    tracing::info!(path = %project_config.display(), "loaded project configuration");
                    return Ok((with_env_overrides(config), warnings));
                }
                Err(e) => {
                    tracing::warn!(path = %project_config.display(), error = %e, "ignoring unreadable configuration");
                }
            }
        }
    }

    // User config paths stay relative to the quest root, not the config directory.
    if let Some(user_config_dir) = dirs::config_dir() {
        let user_config = user_config_dir.join("questc/config.toml");
        if user_config.is_file() {
            match parse_file(&user_config) {
                Ok((mut config, warnings)) => {
                    tracing::info!(path = %user_config.display(), "loaded user configuration");
                    if let Some(root) = quest_root {
                        config.paths.quest_root = root.join(&config.paths.quest_root);
                    }
                    return Ok((with_env_overrides(config), warnings));
                }
                Err(e) => {
                    tracing::warn!(path = %user_config.display(), error = %e, "ignoring unreadable configuration");
                }
            }
        }
    }

    let mut config = Config::default();
    if let Some(root) = quest_root {
        config.paths.quest_root = root.to_path_buf();
    }
    Ok((with_env_overrides(config), Vec::new()))
}

/// Apply environment variable overrides (QUESTC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // QUESTC_QUEST_ROOT
    if let Some(root) = get_env("QUESTC_QUEST_ROOT").filter(|v| !v.trim().is_empty()) {
        config.paths.quest_root = PathBuf::from(root);
    }

    // QUESTC_COMPILER
    if let Some(command) = get_env("QUESTC_COMPILER").filter(|v| !v.trim().is_empty()) {
        config.compiler.command = command;
    }

    // QUESTC_TIMEOUT (seconds)
    if let Some(timeout) = get_env("QUESTC_TIMEOUT") {
        match timeout.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => config.compiler.timeout_secs = secs,
            _ => tracing::warn!(value = %timeout, "ignoring invalid QUESTC_TIMEOUT"),
        }
    }

    // QUESTC_PREPROCESS_STRATEGY
    if let Some(strategy) = get_env("QUESTC_PREPROCESS_STRATEGY") {
        match PreprocessStrategy::parse(&strategy) {
            Some(s) => config.preprocess.strategy = s,
            None => tracing::warn!(value = %strategy, "ignoring invalid QUESTC_PREPROCESS_STRATEGY"),
        }
    }

    // QUESTC_JOBS
    if let Some(jobs) = get_env("QUESTC_JOBS") {
        match jobs.trim().parse::<usize>() {
            Ok(n) if n > 0 => config.compiler.jobs = n,
            _ => tracing::warn!(value = %jobs, "ignoring invalid QUESTC_JOBS"),
        }
    }

    config
}

/// Every key `Config` understands, section names included
const KNOWN_KEYS: &[&str] = &[
    "paths",
    "quest_root",
    "manifest",
    "preprocessed_dir",
    "object_dir",
    "compiler",
    "command",
    "fallbacks",
    "args",
    "timeout_secs",
    "jobs",
    "preprocess",
    "strategy",
    "known_files",
    "output",
    "color",
    "unicode",
    "max_failures_shown",
    "excerpt_width",
];

/// Nearest known key within two edits
fn closest_key(unknown: &str) -> Option<&'static str> {
    KNOWN_KEYS
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, known)| known)
}

/// Levenshtein distance over chars, one row at a time
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(diagonal + 1);
        }
    }
    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_distance_counts_single_edits() {
        assert_eq!(edit_distance("jobs", "jobs"), 0);
        assert_eq!(edit_distance("job", "jobs"), 1);
        assert_eq!(edit_distance("timout_secs", "timeout_secs"), 1);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn closest_key_needs_a_near_match() {
        assert_eq!(closest_key("stratgy"), Some("strategy"));
        assert_eq!(closest_key("completely_unrelated"), None);
    }

    #[test]
    fn warning_points_at_line_and_suggestion() {
        let content = "[compiler]\ncommand = \"qc\"\ntimout_secs = 3\n";
        let warning =
            ConfigWarning::unknown_key(Path::new("questc.toml"), content, "compiler.timout_secs");

        assert_eq!(warning.key, "timout_secs");
        assert_eq!(warning.line, Some(3));
        assert_eq!(
            warning.to_string(),
            "unknown config key 'timout_secs' in questc.toml:3 (did you mean 'timeout_secs'?)"
        );
    }
}
