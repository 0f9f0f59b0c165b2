//! Pipeline error types.

use tally_shared::AppError;
use thiserror::Error;

use crate::loader::LoadError;
use crate::progress::{JobKind, ProgressError};
use crate::reports::ReportError;

/// Errors that fail a whole run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The ledger could not be loaded; no report was started.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A report could not be written.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// A report job panicked or was cancelled.
    #[error("report job {job} aborted: {reason}")]
    JobAborted {
        /// Job that aborted.
        job: JobKind,
        /// Panic or cancellation message.
        reason: String,
    },
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Load(_) | PipelineError::Report(_) => Self::Io(err.to_string()),
            PipelineError::JobAborted { .. } => Self::Internal(err.to_string()),
        }
    }
}

impl From<ProgressError> for AppError {
    fn from(err: ProgressError) -> Self {
        Self::Usage(err.to_string())
    }
}
