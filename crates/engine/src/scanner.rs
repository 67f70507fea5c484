use crate::entry::{DirectoryEntry, EntryKind, MODE_MASK, ScanResult};
use crate::error::{Result, ScanError};
use crate::owner::OwnerResolver;
use crate::preview;
use std::ffi::OsStr;
use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

/// Take one snapshot of the immediate entries of `dir`.
///
/// Entries keep the order the OS enumerates them in. Dotfiles are included.
/// An entry whose `lstat` fails (typically because it was removed after
/// enumeration) is left out and recorded in `ScanResult::errors`.
///
/// # Errors
///
/// Returns [`ScanError::OpenDir`] if the directory itself cannot be opened.
pub fn scan(dir: &Path, owners: &dyn OwnerResolver) -> Result<ScanResult> {
    let read_dir = fs::read_dir(dir).map_err(|source| ScanError::OpenDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut result = ScanResult::default();
    for item in read_dir {
        let item = match item {
            Ok(item) => item,
            Err(source) => {
                result.errors.push(ScanError::ReadDir {
                    path: dir.to_path_buf(),
                    source,
                });
                continue;
            }
        };

        let name = item.file_name();
        let full = dir.join(&name);
        match describe_entry(&full, &name, owners) {
            Ok(entry) => result.entries.push(entry),
            Err(err) => {
                log::debug!("skipping entry: {err}");
                result.errors.push(err);
            }
        }
    }

    log::debug!(
        "scanned {}: {} entries, {} skipped",
        dir.display(),
        result.entries.len(),
        result.errors.len()
    );
    Ok(result)
}

/// Build the row for a single entry at `path`, named `name` in its parent.
///
/// # Errors
///
/// Returns [`ScanError::Metadata`] if `lstat` fails.
pub fn describe_entry(
    path: &Path,
    name: &OsStr,
    owners: &dyn OwnerResolver,
) -> Result<DirectoryEntry> {
    let meta = fs::symlink_metadata(path).map_err(|source| ScanError::Metadata {
        path: path.to_path_buf(),
        source,
    })?;

    let kind = EntryKind::from_file_type(meta.file_type());
    Ok(DirectoryEntry {
        name: name.to_os_string(),
        size: i64::try_from(meta.size()).unwrap_or(i64::MAX),
        kind,
        mode: meta.mode() & MODE_MASK,
        owner: owners.resolve(meta.uid()),
        preview: preview::preview_for(path, kind),
    })
}
