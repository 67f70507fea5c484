// src/presentation.rs
use dirwatch_engine::config::WatchConfig;
use dirwatch_engine::owner::OwnerResolver;
use dirwatch_engine::render;
use std::io::{self, Write};

/// Cursor home + clear to end of screen.
pub const CLEAR_SCREEN: &str = "\x1B[H\x1B[J";

/// One refresh on the real terminal: stdout for the table, stderr for
/// diagnostics. Write failures are logged, never fatal.
pub fn print_cycle(config: &WatchConfig, owners: &dyn OwnerResolver) {
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut diag = stderr.lock();

    if let Err(e) = write_cycle(config, owners, &mut out, &mut diag) {
        tracing::warn!(error = %e, "failed to write snapshot");
    }
}

/// Clear (if enabled), render one snapshot of `config.root`, flush.
///
/// # Errors
///
/// Propagates write errors from either sink.
pub fn write_cycle<W: Write, E: Write>(
    config: &WatchConfig,
    owners: &dyn OwnerResolver,
    out: &mut W,
    diag: &mut E,
) -> io::Result<()> {
    if config.clear_screen {
        out.write_all(CLEAR_SCREEN.as_bytes())?;
        out.flush()?;
    }
    render::scan_and_render(&config.root, owners, out, diag)?;
    out.flush()?;
    diag.flush()
}
