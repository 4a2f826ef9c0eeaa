//! `ripple relations`: list declared relations and validate them

use anyhow::Result;
use colored::Colorize;

pub fn run(cli: &crate::Cli) -> Result<()> {
    let config = super::load_config(cli)?;

    if config.relations.is_empty() {
        println!(
            "  {}",
            "No relations declared. Add [[relations]] to .ripple.toml.".dimmed()
        );
        return Ok(());
    }

    println!(
        "  {}",
        format!("{:<16} {:<16} {:<16} {}", "From", "To", "Via", "Patterns").bold()
    );
    println!("  {}", "\u{2500}".repeat(64).dimmed());
    for relation in &config.relations {
        let via = if relation.via.is_known() {
            relation.via.to_string().normal()
        } else {
            relation.via.to_string().yellow()
        };
        println!(
            "  {:<16} {:<16} {:<16} {}",
            relation.from,
            relation.to,
            via,
            relation.patterns.join(", ")
        );
    }
    println!();

    match config.validate() {
        Ok(warnings) => {
            for w in &warnings {
                println!("  {}: {}", "warn".yellow(), w);
            }
            println!("  {}", "Configuration OK".green());
        }
        Err(e) => {
            println!("  {}: {}", "error".red(), e);
            return Err(anyhow::Error::new(e).context("invalid relation configuration"));
        }
    }

    Ok(())
}
