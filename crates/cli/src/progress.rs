//! Spinner lines for the analyze pipeline

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt::Display;
use std::time::{Duration, Instant};

/// One stage of `ripple analyze`, shown as a spinner on stderr.
///
/// On a non-TTY the spinner draws nothing; the closing line from
/// [`Step::finish`] and any [`Step::warn`] lines are still printed.
pub struct Step {
    bar: ProgressBar,
    label: String,
    started: Instant,
}

impl Step {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        bar.set_message(format!("{}...", label));
        bar.enable_steady_tick(Duration::from_millis(80));
        Self {
            bar,
            label,
            started: Instant::now(),
        }
    }

    /// Clear the spinner and print `label: summary (elapsed)`
    pub fn finish(&self, summary: impl Display) {
        self.bar.finish_and_clear();
        eprintln!(
            "  {} {}: {} {}",
            "✓".green(),
            self.label,
            summary,
            format!("({}ms)", self.started.elapsed().as_millis()).dimmed()
        );
    }

    /// Print a warning above the spinner; repo-level failures land here
    pub fn warn(&self, msg: impl Display) {
        self.bar
            .println(format!("  {} {}", "warn:".yellow().bold(), msg));
    }
}
