//! Ripple CLI library: exposed for integration tests

pub mod commands;
pub mod logging;
pub mod output;
pub mod progress;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ripple")]
#[command(about = "See how a change ripples across your repositories", long_about = None)]
#[command(version = ripple_core::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to .ripple.toml (default: search upward from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Diff base (default: general.base_ref from config)
    #[arg(long, global = true)]
    pub base: Option<String>,

    /// Diff head (default: working tree)
    #[arg(long, global = true)]
    pub head: Option<String>,

    /// Read `<repo>.json` impact lists from this directory instead of diffing
    #[arg(long, global = true)]
    pub impacts_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Exit non-zero when any cross-repo impact is found
    #[arg(long, global = true)]
    pub fail_on_cross_repo: bool,

    /// Exit non-zero when breaking changes are detected
    #[arg(long, global = true)]
    pub fail_on_breaking: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze changes across all configured repositories (default command)
    Analyze,

    /// Initialize .ripple.toml configuration
    Init {
        /// Path to initialize (default: current directory)
        path: Option<PathBuf>,
    },

    /// List declared relations and check them against the configured repos
    Relations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}
