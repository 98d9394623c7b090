//! Logging setup for the binary.
//!
//! Logs go to stderr so they never interleave with session output on stdout.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";
const VERBOSE_FILTER: &str = "warn,budgetbuddy=debug";

/// Pick the filter directive: verbose mode raises our own crate to debug.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER }
}

/// Initialize the global subscriber. `RUST_LOG` wins over the verbose flag.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
