//! Build command handler
//!
//! Loads the manifest and compiles every entry, printing per-entry progress
//! and a final summary (or NDJSON events with `--json`).

use std::sync::atomic::AtomicBool;

use anyhow::Result;

use questc::config::Config;
use questc::infrastructure::{load_manifest, JsonEventSink};
use questc::presentation::cli::BuildArgs;
use questc::presentation::create_compile_use_case;
use questc::CompileOptions;

use super::{open_session, override_manifest, GlobalArgs};
use crate::ui::views::build::{
    render_build_header, render_build_summary, render_interrupted, ConsoleEventSink,
};

/// Execute the build command. Returns 0 iff every entry compiled.
pub fn cmd_build(global: &GlobalArgs, args: &BuildArgs, interrupted: &AtomicBool) -> Result<i32> {
    let session = open_session(global)?;
    let ui = session.ui;
    let mut config = session.config;
    apply_overrides(&mut config, args)?;

    let manifest = config.manifest_path();
    let entries = load_manifest(&manifest)?;
    tracing::info!(manifest = %manifest.display(), entries = entries.len(), "loaded manifest");

    let use_case = create_compile_use_case(&config);
    let options = CompileOptions::new().with_jobs(config.jobs());

    if ui.json {
        let sink = JsonEventSink::stdout();
        let report = use_case.execute(&entries, &options, &sink, interrupted);
        return Ok(report.exit_code());
    }

    print!(
        "{}",
        render_build_header(
            &config,
            &use_case.compiler().program().display().to_string(),
            options.jobs,
            ui.color,
            ui.unicode,
        )
    );
    println!();

    let sink = ConsoleEventSink::stdout(config.output.excerpt_width, ui.color);
    let report = use_case.execute(&entries, &options, &sink, interrupted);

    println!();
    if report.interrupted {
        print!(
            "{}",
            render_interrupted(report.processed(), report.total, ui.color, ui.unicode)
        );
    }
    print!(
        "{}",
        render_build_summary(
            &report,
            config.output.max_failures_shown,
            config.output.excerpt_width,
            ui.color,
            ui.unicode,
        )
    );

    Ok(report.exit_code())
}

/// CLI flags sit above every config layer
fn apply_overrides(config: &mut Config, args: &BuildArgs) -> Result<()> {
    override_manifest(config, args.manifest.as_deref())?;
    if let Some(compiler) = &args.compiler {
        config.compiler.command = compiler.clone();
    }
    if let Some(timeout) = args.timeout {
        config.compiler.timeout_secs = timeout;
    }
    if let Some(strategy) = args.strategy {
        config.preprocess.strategy = strategy;
    }
    if let Some(jobs) = args.jobs {
        config.compiler.jobs = usize::try_from(jobs).unwrap_or(usize::MAX);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use questc::PreprocessStrategy;

    #[test]
    fn flags_override_config() {
        let mut config = Config::default();
        let args = BuildArgs {
            manifest: None,
            compiler: Some("./bin/qc".to_string()),
            timeout: Some(5),
            strategy: Some(PreprocessStrategy::Off),
            jobs: Some(4),
        };

        apply_overrides(&mut config, &args).unwrap();

        assert_eq!(config.compiler.command, "./bin/qc");
        assert_eq!(config.compiler.timeout_secs, 5);
        assert_eq!(config.preprocess.strategy, PreprocessStrategy::Off);
        assert_eq!(config.jobs(), 4);
    }

    #[test]
    fn absent_flags_keep_config() {
        let mut config = Config::default();
        config.compiler.timeout_secs = 12;

        apply_overrides(&mut config, &BuildArgs::default()).unwrap();

        assert_eq!(config.compiler.timeout_secs, 12);
        assert_eq!(config.compiler.command, "qc");
        assert_eq!(config.jobs(), 1);
    }
}
