//! Ripple CLI - cross-repository impact analysis

use anyhow::Result;
use clap::Parser;
use ripple_cli::commands::{self, analyze::AnalyzeExitCode};
use ripple_cli::{logging, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Some(Commands::Init { ref path }) => {
            commands::init::run(path.as_deref())?;
        }
        Some(Commands::Relations) => {
            commands::relations::run(&cli)?;
        }
        Some(Commands::Analyze) | None => {
            if commands::analyze::run(&cli)? == AnalyzeExitCode::ThresholdExceeded {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
