// src/logging.rs
//! Diagnostic logging on stderr, filtered by `RUST_LOG` (default `warn`).
//!
//! The engine logs through the `log` facade; the subscriber's `tracing-log`
//! bridge forwards those records too.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
