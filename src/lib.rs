// src/lib.rs
//! `dirwatch`: a live, periodically refreshed listing of one directory.
//!
//! The scanning and table layout live in `dirwatch_engine`; this crate owns
//! the command line, logging setup and the terminal side of each cycle.

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod presentation;

use crate::args::Args;
use crate::config::WatchConfig;
use crate::error::{AppError, Result};
use dirwatch_engine::owner::SystemOwners;
use dirwatch_engine::{CancelToken, signal, watch};

/// Watch `args.directory` until SIGINT or SIGTERM.
///
/// # Errors
///
/// Fails only before the first cycle: invalid arguments or signal setup.
pub fn run(args: Args) -> Result<()> {
    let config = WatchConfig::try_from(args)?;

    let token = CancelToken::new();
    signal::install_interrupt_bridge(token.clone()).map_err(AppError::Signal)?;

    tracing::info!(root = %config.root.display(), "watching directory");
    let owners = SystemOwners;
    let cycles = watch::watch_loop(&config, &token, || {
        presentation::print_cycle(&config, &owners);
    });
    tracing::info!(cycles, "interrupted, exiting");
    Ok(())
}
