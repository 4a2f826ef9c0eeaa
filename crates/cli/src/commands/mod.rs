//! CLI commands

pub mod analyze;
pub mod init;
pub mod relations;

use anyhow::Result;
use ripple_core::RippleConfig;

/// Load `--config` if given, else search upward from the current directory
pub(crate) fn load_config(cli: &crate::Cli) -> Result<RippleConfig> {
    match cli.config {
        Some(ref path) => RippleConfig::from_file(path),
        None => RippleConfig::find_and_load(&std::env::current_dir()?),
    }
}
