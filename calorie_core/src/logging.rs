//! Tracing setup for the kcal binary.
//!
//! Command output goes to stdout (including `status --json`), so log lines
//! are written to stderr and stay quiet unless something needs attention.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber at WARN
///
/// Recovered corruption and restored partial writes show up at this level.
/// Set RUST_LOG=debug to see every store read and write.
pub fn init() {
    init_with_level("warn")
}

/// Install the global subscriber with `default_level` as the fallback
/// filter when RUST_LOG is unset or invalid.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

/// Route ledger and store logs into the test harness output
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
