use crate::error::ScanError;
use std::ffi::OsString;
use std::fmt;
use std::fs::FileType;
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::FileTypeExt;

/// Permission bits kept from `st_mode` (setuid, setgid, sticky and rwx).
pub const MODE_MASK: u32 = 0o7777;

/// Kind of a directory entry, taken from `lstat` so links are never followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Dir,
    Link,
    BlockDevice,
    CharDevice,
    Fifo,
    Socket,
    Other,
}

impl EntryKind {
    #[must_use]
    pub fn from_file_type(ft: FileType) -> Self {
        if ft.is_file() {
            Self::File
        } else if ft.is_dir() {
            Self::Dir
        } else if ft.is_symlink() {
            Self::Link
        } else if ft.is_block_device() {
            Self::BlockDevice
        } else if ft.is_char_device() {
            Self::CharDevice
        } else if ft.is_fifo() {
            Self::Fifo
        } else if ft.is_socket() {
            Self::Socket
        } else {
            Self::Other
        }
    }

    /// Short tag shown in the TYPE column.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Dir => "dir",
            Self::Link => "link",
            Self::BlockDevice => "blk",
            Self::CharDevice => "chr",
            Self::Fifo => "fifo",
            Self::Socket => "sock",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One row of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Base name as returned by directory enumeration, bytes untouched.
    pub name: OsString,
    pub size: i64,
    pub kind: EntryKind,
    /// Permission bits, already masked with [`MODE_MASK`].
    pub mode: u32,
    pub owner: String,
    /// May carry raw bytes from a symlink target.
    pub preview: OsString,
}

impl DirectoryEntry {
    /// Cell bytes in column order: NAME, SIZE, TYPE, MODE, OWNER, CONTENTS.
    #[must_use]
    pub fn cells(&self) -> [Vec<u8>; 6] {
        [
            self.name.as_bytes().to_vec(),
            format!("{}B", self.size).into_bytes(),
            self.kind.tag().as_bytes().to_vec(),
            format!("{:04o}", self.mode).into_bytes(),
            self.owner.as_bytes().to_vec(),
            self.preview.as_bytes().to_vec(),
        ]
    }
}

/// Entries of one scan in enumeration order, plus the entries that had to be
/// skipped. Rebuilt from scratch every cycle.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub entries: Vec<DirectoryEntry>,
    pub errors: Vec<ScanError>,
}
