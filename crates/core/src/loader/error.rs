//! Loader error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a ledger load.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source directory could not be listed.
    #[error("cannot read source directory {}: {source}", .path.display())]
    DirectoryUnreadable {
        /// Source directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A ledger file could not be read.
    #[error("cannot read ledger file {}: {source}", .path.display())]
    FileUnreadable {
        /// Ledger file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Create a directory unreadable error.
    #[must_use]
    pub fn directory_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a file unreadable error.
    #[must_use]
    pub fn file_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileUnreadable {
            path: path.into(),
            source,
        }
    }
}
