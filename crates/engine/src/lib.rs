// crates/engine/src/lib.rs
//! Snapshot engine behind `dirwatch`.
//!
//! One cycle is [`render::scan_and_render`]: list the immediate entries of a
//! directory, gather `lstat` metadata, an owner name and a content preview for
//! each, and write the result as a fixed-width table. [`watch::watch_loop`]
//! repeats cycles until a [`cancel::CancelToken`] is cancelled.

#[cfg(not(unix))]
compile_error!("dirwatch_engine relies on Unix file metadata and signals");

pub mod cancel;
pub mod config;
pub mod entry;
pub mod error;
pub mod layout;
pub mod owner;
pub mod preview;
pub mod render;
pub mod scanner;
pub mod signal;
pub mod watch;

pub use cancel::CancelToken;
pub use config::{WatchConfig, WatchConfigBuilder};
pub use entry::{DirectoryEntry, EntryKind, ScanResult};
pub use error::{Result, ScanError};
pub use owner::{FixedOwners, OwnerResolver, SystemOwners};
