//! questc CLI - compile quest scripts listed in a manifest
//!
//! Usage: questc [COMMAND]
//!
//! Commands:
//!   build     Compile every quest in the manifest (default)
//!   plan      Show what a build would do
//!   classify  Report whether quest files need preprocessing

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use questc::presentation::cli::{Cli, Commands};

mod commands;
mod ui;

use commands::GlobalArgs;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        flag.store(true, Ordering::SeqCst);
    }) {
        tracing::warn!(error = %e, "could not install Ctrl+C handler");
    }

    let global = GlobalArgs::from_cli(&cli);
    let command_name = match &cli.command {
        None | Some(Commands::Build(_)) => "build",
        Some(Commands::Plan { .. }) => "plan",
        Some(Commands::Classify { .. }) => "classify",
    };

    let result = match &cli.command {
        Some(Commands::Plan { manifest }) => commands::plan::cmd_plan(&global, manifest.as_deref()),
        Some(Commands::Classify { files }) => commands::classify::cmd_classify(&global, files),
        None | Some(Commands::Build(_)) => {
            let args = cli.build_args().unwrap_or_default();
            commands::build::cmd_build(&global, &args, &interrupted)
        }
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            ui::error::print_error(&e, command_name, global.json);
            std::process::exit(1);
        }
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from warn.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
