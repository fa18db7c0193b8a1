//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never interleave with command output on stdout.

use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_LOG_LEVEL;

/// Install the global fmt subscriber with the given filter directive.
///
/// An unparsable directive falls back to the default level.
pub fn init_tracing(directive: &str) {
    let filter =
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
