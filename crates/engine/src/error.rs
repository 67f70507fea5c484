use std::path::PathBuf;
use thiserror::Error;

/// Failures met while taking a directory snapshot.
///
/// The `Display` form of each variant is the diagnostic line written to the
/// error stream; none of them stop the watch loop.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Unable to open '{}': {source}", .path.display())]
    OpenDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("readdir('{}'): {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("lstat('{}'): {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Path the failure refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::OpenDir { path, .. } | Self::ReadDir { path, .. } | Self::Metadata { path, .. } => {
                path
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn open_dir_message_names_path() {
        let err = ScanError::OpenDir {
            path: PathBuf::from("/no/such/dir"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Unable to open '/no/such/dir': "));
        assert_eq!(err.path(), std::path::Path::new("/no/such/dir"));
    }

    #[test]
    fn metadata_message_uses_lstat_prefix() {
        let err = ScanError::Metadata {
            path: PathBuf::from("dir/gone"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("lstat('dir/gone'): "));
    }
}
