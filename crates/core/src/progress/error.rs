//! Progress error types.

use thiserror::Error;

/// Errors from status queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressError {
    /// The job name is not one of `accounts`, `yearly`, `fs`.
    #[error("Unknown job: {0}")]
    UnknownJob(String),
}
