//! Tests for the config module

use super::loader::with_env_overrides_from;
use super::types::*;
use crate::domain::value_objects::PreprocessStrategy;
use crate::error::QuestError;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.paths.manifest, PathBuf::from("locale_list"));
    assert_eq!(config.paths.preprocessed_dir, PathBuf::from("pre_qc"));
    assert_eq!(config.compiler.timeout_secs, 30);
    assert_eq!(config.compiler.jobs, 1);
    assert_eq!(config.preprocess.strategy, PreprocessStrategy::List);
    assert_eq!(config.preprocess.known_files.len(), DEFAULT_KNOWN_FILES.len());
    assert_eq!(config.output.max_failures_shown, 10);
    assert_eq!(config.output.excerpt_width, 80);
}

#[test]
fn test_default_known_files_contains_reference_entries() {
    assert_eq!(DEFAULT_KNOWN_FILES.len(), 28);
    assert!(DEFAULT_KNOWN_FILES.contains(&"dragon_soul.quest"));
    assert!(DEFAULT_KNOWN_FILES.contains(&"main_quest_flame_lv105.quest"));
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[paths]
manifest = "lists/locale_list"
preprocessed_dir = "build/pre"

[compiler]
command = "./qc"
timeout_secs = 5
jobs = 4

[preprocess]
strategy = "detect"
command = ["./pre_qc"]
known_files = ["custom.quest"]

[output]
color = "never"
max_failures_shown = 3
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.paths.manifest, PathBuf::from("lists/locale_list"));
    assert_eq!(config.paths.preprocessed_dir, PathBuf::from("build/pre"));
    assert_eq!(config.compiler.command, "./qc");
    assert_eq!(config.timeout().as_secs(), 5);
    assert_eq!(config.jobs(), 4);
    assert_eq!(config.preprocess.strategy, PreprocessStrategy::Detect);
    assert_eq!(config.preprocess.command, vec!["./pre_qc"]);
    assert_eq!(config.preprocess.known_files, vec!["custom.quest"]);
    assert_eq!(config.output.color, ColorMode::Never);
    assert_eq!(config.output.max_failures_shown, 3);
    // untouched sections keep defaults
    assert_eq!(config.compiler.fallbacks.len(), 2);
}

#[test]
fn test_jobs_never_below_one() {
    let mut config = Config::default();
    config.compiler.jobs = 0;
    assert_eq!(config.jobs(), 1);
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("questc.toml");
    fs::write(&path, "[compiler]\ntimout_secs = 3\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.compiler.timeout_secs, 30);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "timout_secs");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("timeout_secs"));
    assert!(warnings[0].to_string().contains("did you mean 'timeout_secs'"));
}

#[test]
fn test_load_resolves_quest_root_against_config_dir() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("questc.toml");
    fs::write(&path, "[paths]\nquest_root = \"share/quest\"\n").unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.paths.quest_root, dir.path().join("share/quest"));
    assert_eq!(
        config.manifest_path(),
        dir.path().join("share/quest/locale_list")
    );
}

#[test]
fn test_load_invalid_toml_is_invalid_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("questc.toml");
    fs::write(&path, "[compiler\ncommand = ").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, QuestError::InvalidConfig { .. }));
}

#[test]
fn test_load_zero_timeout_is_invalid_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("questc.toml");
    fs::write(&path, "[compiler]\ntimeout_secs = 0\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("timeout_secs"), "{err}");
}

#[test]
fn test_resolve_explicit_missing_is_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = Config::resolve(Some(&missing), None).unwrap_err();
    assert!(matches!(err, QuestError::InvalidConfig { .. }));
}

#[test]
fn test_resolve_prefers_quest_root_config() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("questc.toml"),
        "[compiler]\ncommand = \"local-qc\"\n",
    )
    .unwrap();

    let (config, warnings) = Config::resolve(None, Some(dir.path())).unwrap();

    assert!(warnings.is_empty());
    assert_eq!(config.compiler.command, "local-qc");
    assert_eq!(config.paths.quest_root, dir.path().join("."));
}

#[test]
fn test_resolve_skips_broken_implicit_config() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("questc.toml"), "not = [valid").unwrap();

    // falls through to user config or defaults instead of failing
    let resolved = Config::resolve(None, Some(dir.path()));
    assert!(resolved.is_ok());
}

#[test]
fn test_env_overrides() {
    let config = with_env_overrides_from(
        Config::default(),
        env_from(&[
            ("QUESTC_QUEST_ROOT", "/srv/quest"),
            ("QUESTC_COMPILER", "/opt/qc"),
            ("QUESTC_TIMEOUT", "12"),
            ("QUESTC_PREPROCESS_STRATEGY", "off"),
            ("QUESTC_JOBS", "8"),
        ]),
    );

    assert_eq!(config.paths.quest_root, PathBuf::from("/srv/quest"));
    assert_eq!(config.compiler.command, "/opt/qc");
    assert_eq!(config.compiler.timeout_secs, 12);
    assert_eq!(config.preprocess.strategy, PreprocessStrategy::Off);
    assert_eq!(config.compiler.jobs, 8);
}

#[test]
fn test_env_overrides_ignore_invalid_values() {
    let config = with_env_overrides_from(
        Config::default(),
        env_from(&[
            ("QUESTC_TIMEOUT", "soon"),
            ("QUESTC_PREPROCESS_STRATEGY", "sometimes"),
            ("QUESTC_JOBS", "0"),
            ("QUESTC_COMPILER", "  "),
        ]),
    );

    assert_eq!(config.compiler.timeout_secs, 30);
    assert_eq!(config.preprocess.strategy, PreprocessStrategy::List);
    assert_eq!(config.compiler.jobs, 1);
    assert_eq!(config.compiler.command, "qc");
}
