//! CLI command definitions, argument parsing, and logging setup.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use finnexus::constants::ENV_LOG;
use tracing_subscriber::EnvFilter;

/// Install the stderr diagnostic logger.
///
/// `--verbose` forces `debug`; otherwise the filter comes from
/// `FINNEXUS_LOG`, defaulting to `warn`.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Fails only if a subscriber is already installed, as in tests.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
