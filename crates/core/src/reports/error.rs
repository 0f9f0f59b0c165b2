//! Report error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output directory could not be created.
    #[error("cannot create output directory {}: {source}", .path.display())]
    OutputDirectory {
        /// Output directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A report file could not be written.
    #[error("cannot write report {}: {source}", .path.display())]
    Write {
        /// Report file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
