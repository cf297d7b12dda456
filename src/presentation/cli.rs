//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config, --quest-root) are inherited by all subcommands
//! - Running without a subcommand is the same as `questc build`

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::PreprocessStrategy;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// questc - compile quest scripts listed in a manifest
#[derive(Parser, Debug)]
#[command(name = "questc")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'questc' without arguments to build every quest in the manifest.")]
pub struct Cli {
    /// Output format for CI (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: <quest-root>/questc.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Quest root directory the compiler runs in
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub quest_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile every quest in the manifest (default)
    Build(BuildArgs),

    /// Show what a build would do without invoking anything
    Plan {
        /// Manifest file (default: <quest-root>/locale_list)
        #[arg(short, long, value_name = "PATH")]
        manifest: Option<PathBuf>,
    },

    /// Report whether quest files need the preprocessing pass
    Classify {
        /// Quest file names or paths
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },
}

/// Options of the build command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildArgs {
    /// Manifest file (default: <quest-root>/locale_list)
    #[arg(short, long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Compiler command or path
    #[arg(long, value_name = "CMD")]
    pub compiler: Option<String>,

    /// Per-file compile timeout in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Preprocessing strategy
    #[arg(long, value_enum)]
    pub strategy: Option<PreprocessStrategy>,

    /// Compile up to N quests at once
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub jobs: Option<u64>,
}

impl Cli {
    /// Build arguments for the selected command; bare `questc` builds.
    pub fn build_args(&self) -> Option<BuildArgs> {
        match &self.command {
            None => Some(BuildArgs::default()),
            Some(Commands::Build(args)) => Some(args.clone()),
            Some(_) => None,
        }
    }
}
