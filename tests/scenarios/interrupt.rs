//! Ctrl+C during a build: the running compiler is killed and nothing else starts.
#![cfg(unix)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use questc::config::Config;
use questc::domain::ports::NoopEventSink;
use questc::infrastructure::load_manifest;
use questc::presentation::create_compile_use_case;
use questc::CompileOptions;

use crate::common::*;

fn config_for(env: &QuestEnv) -> Config {
    let (mut config, _) = Config::resolve(None, Some(env.root.path())).unwrap();
    config.paths.quest_root = env.root.path().to_path_buf();
    config.compiler.timeout_secs = 20;
    config
}

#[test]
fn interrupt_kills_running_compile_and_stops_the_run() {
    let env = QuestEnv::new();
    env.write("a.quest", GOOD_QUEST);
    env.write("slow.quest", HANGING_QUEST);
    env.write("c.quest", GOOD_QUEST);
    env.write_manifest(&["a.quest", "slow.quest", "c.quest"]);

    let config = config_for(&env);
    let entries = load_manifest(&config.manifest_path()).unwrap();
    let use_case = create_compile_use_case(&config);

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    let log = env.path("invocations.log");
    let trigger = thread::spawn(move || {
        // Wait until the hanging compile has started.
        let deadline = Instant::now() + Duration::from_secs(10);
        while Instant::now() < deadline {
            let started = std::fs::read_to_string(&log).unwrap_or_default();
            if started.contains("slow.quest") {
                break;
            }
            thread::sleep(Duration::from_millis(20));
        }
        flag.store(true, Ordering::SeqCst);
    });

    let started = Instant::now();
    let report = use_case.execute(&entries, &CompileOptions::new(), &NoopEventSink, &interrupted);
    trigger.join().unwrap();

    assert!(started.elapsed() < Duration::from_secs(15));
    assert!(report.interrupted);
    assert_eq!(report.processed(), 1);
    assert_eq!(report.total, 3);
    assert_eq!(report.exit_code(), 1);
    assert_eq!(env.invocations(), ["a.quest", "slow.quest"]);
}
