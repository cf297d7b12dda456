//! A broken preprocessor never blocks compilation of the original file.
#![cfg(unix)]

use std::sync::atomic::AtomicBool;

use questc::config::Config;
use questc::domain::ports::NoopEventSink;
use questc::infrastructure::load_manifest;
use questc::presentation::create_compile_use_case;
use questc::{CompileOptions, CompileStatus};

use crate::common::*;

fn build(env: &QuestEnv, edit: impl FnOnce(&mut Config)) -> questc::CompileReport {
    let (mut config, _) = Config::resolve(None, Some(env.root.path())).unwrap();
    config.paths.quest_root = env.root.path().to_path_buf();
    edit(&mut config);

    let entries = load_manifest(&config.manifest_path()).unwrap();
    create_compile_use_case(&config).execute(
        &entries,
        &CompileOptions::new(),
        &NoopEventSink,
        &AtomicBool::new(false),
    )
}

#[test]
fn crashing_preprocessor_falls_back_to_original() {
    let env = QuestEnv::new();
    env.write("fake_pre.sh", "echo 'boom' >&2\nexit 7\n");
    env.write("flame_dungeon.quest", GOOD_QUEST);
    env.write_manifest(&["flame_dungeon.quest"]);

    let report = build(&env, |_| {});

    assert!(report.is_success());
    let outcome = &report.outcomes[0];
    assert_eq!(outcome.status(), CompileStatus::Compiled);
    assert!(!outcome.preprocessed());
    assert_eq!(env.invocations(), ["flame_dungeon.quest"]);
}

#[test]
fn preprocessor_that_writes_nothing_falls_back_to_original() {
    let env = QuestEnv::new();
    env.write("fake_pre.sh", "exit 0\n");
    env.write("flame_dungeon.quest", GOOD_QUEST);
    env.write_manifest(&["flame_dungeon.quest"]);

    let report = build(&env, |_| {});

    assert!(report.is_success());
    assert!(!report.outcomes[0].preprocessed());
    assert_eq!(env.invocations(), ["flame_dungeon.quest"]);
}

#[test]
fn missing_preprocessor_program_falls_back_to_original() {
    let env = QuestEnv::new();
    env.write("flame_dungeon.quest", GOOD_QUEST);
    env.write_manifest(&["flame_dungeon.quest"]);

    let report = build(&env, |config| {
        config.preprocess.command = vec!["/nonexistent/pre_qc".to_string()];
    });

    assert!(report.is_success());
    assert_eq!(env.invocations(), ["flame_dungeon.quest"]);
}

#[test]
fn copy_left_by_earlier_run_is_never_compiled() {
    let env = QuestEnv::new();
    env.write("fake_pre.sh", "exit 0\n");
    env.write("flame_dungeon.quest", GOOD_QUEST);
    env.write("pre_qc/flame_dungeon.quest", "STALE FROM LAST RUN\n");
    env.write_manifest(&["flame_dungeon.quest"]);

    let report = build(&env, |_| {});

    assert!(report.is_success());
    assert!(!report.outcomes[0].preprocessed());
    assert_eq!(env.invocations(), ["flame_dungeon.quest"]);
    assert!(!env.path("pre_qc/flame_dungeon.quest").exists());
}
