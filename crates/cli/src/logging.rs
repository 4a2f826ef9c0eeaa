//! Diagnostic logging setup
//!
//! Library crates log through `tracing`; this installs the stderr subscriber.
//! The filter comes from `RIPPLE_LOG`, then `RUST_LOG`, defaulting to `warn`.
//! `--verbose` forces `debug`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "RIPPLE_LOG";

/// Build the filter for the given verbosity
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Calling this twice is a no-op.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
