// crates/engine/src/preview.rs
//! CONTENTS column: what an entry "looks like" without opening a viewer.
//!
//! - directories show [`DIRECTORY_MARKER`]
//! - symlinks show their literal target text, `-> target`
//! - regular files show their first line, sanitized by [`sanitize_preview`]
//! - everything else shows [`SPECIAL_MARKER`]
//!
//! Errors reading a link or a file are embedded in the preview text instead
//! of failing the row.

use crate::entry::EntryKind;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Read};
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::Path;

/// Maximum number of bytes read from the start of a regular file.
pub const PREVIEW_LIMIT: usize = 511;

/// Replacement for bytes that are not printable ASCII.
pub const PLACEHOLDER: char = '#';

pub const DIRECTORY_MARKER: &str = "(directory)";
pub const SPECIAL_MARKER: &str = "(special)";

/// Turn the leading bytes of a file into a single printable line.
///
/// Stops at the first `\n` (not included) or after [`PREVIEW_LIMIT`] bytes.
/// Printable ASCII is kept, every other byte becomes [`PLACEHOLDER`]; a NUL
/// or `\r` does not end the line.
#[must_use]
pub fn sanitize_preview(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take(PREVIEW_LIMIT)
        .take_while(|&&b| b != b'\n')
        .map(|&b| if is_printable(b) { char::from(b) } else { PLACEHOLDER })
        .collect()
}

const fn is_printable(b: u8) -> bool {
    matches!(b, 0x20..=0x7e)
}

/// Compute the preview for the entry at `path`, already classified as `kind`.
///
/// A link target is kept byte for byte, so the result is an `OsString`.
#[must_use]
pub fn preview_for(path: &Path, kind: EntryKind) -> OsString {
    match kind {
        EntryKind::Dir => DIRECTORY_MARKER.into(),
        EntryKind::Link => match fs::read_link(path) {
            Ok(target) => {
                let mut text = b"-> ".to_vec();
                text.extend_from_slice(target.as_os_str().as_bytes());
                OsString::from_vec(text)
            }
            Err(e) => format!("-> [readlink error: {e}]").into(),
        },
        EntryKind::File => match read_head(path) {
            Ok(head) => sanitize_preview(&head).into(),
            Err(e) => format!("[open/read error: {e}]").into(),
        },
        EntryKind::BlockDevice
        | EntryKind::CharDevice
        | EntryKind::Fifo
        | EntryKind::Socket
        | EntryKind::Other => SPECIAL_MARKER.into(),
    }
}

fn read_head(path: &Path) -> io::Result<Vec<u8>> {
    let mut head = Vec::with_capacity(PREVIEW_LIMIT);
    File::open(path)?
        .take(PREVIEW_LIMIT as u64)
        .read_to_end(&mut head)?;
    Ok(head)
}
