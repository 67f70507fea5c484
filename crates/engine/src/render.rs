use crate::entry::ScanResult;
use crate::layout::TableLayout;
use crate::owner::OwnerResolver;
use crate::scanner;
use std::io::{self, Write};
use std::path::Path;

/// Scan `dir` and write one snapshot.
///
/// The table goes to `out`; one diagnostic line per failure goes to `diag`.
/// When the directory cannot be opened nothing is written to `out`. Scan
/// failures never surface as an `Err`.
///
/// # Errors
///
/// Only write errors from `out` or `diag` are returned.
pub fn scan_and_render<W: Write, E: Write>(
    dir: &Path,
    owners: &dyn OwnerResolver,
    out: &mut W,
    diag: &mut E,
) -> io::Result<()> {
    match scanner::scan(dir, owners) {
        Ok(result) => {
            write_snapshot(&result, out)?;
            for err in &result.errors {
                writeln!(diag, "{err}")?;
            }
        }
        Err(err) => {
            log::debug!("snapshot of {} failed: {err}", dir.display());
            writeln!(diag, "{err}")?;
        }
    }
    Ok(())
}

/// Write the table for an already collected scan.
///
/// # Errors
///
/// Propagates write errors from `out`.
pub fn write_snapshot<W: Write>(result: &ScanResult, out: &mut W) -> io::Result<()> {
    let layout = TableLayout::snapshot();
    layout.write_header(out)?;
    for entry in &result.entries {
        log::trace!("row {}", entry.name.to_string_lossy());
        layout.write_row(out, &entry.cells())?;
    }
    Ok(())
}
