//! Concurrent job status map.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;

use super::error::ProgressError;
use super::types::{JobKind, JobStatus};

/// Status of every report job, shared between the pipeline and its jobs.
///
/// Cloning is cheap and every clone sees the same entries. Each job only
/// writes its own key, so jobs never contend on the same entry.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    statuses: Arc<DashMap<JobKind, JobStatus>>,
}

impl ProgressTracker {
    /// Creates a tracker with every job `idle`.
    #[must_use]
    pub fn new() -> Self {
        let statuses = DashMap::with_capacity(JobKind::ALL.len());
        for kind in JobKind::ALL {
            statuses.insert(kind, JobStatus::Idle);
        }
        Self {
            statuses: Arc::new(statuses),
        }
    }

    /// Marks a job as started.
    pub fn start(&self, kind: JobKind) {
        self.statuses.insert(kind, JobStatus::Starting);
    }

    /// Marks a job as finished after `duration`.
    pub fn finish(&self, kind: JobKind, duration: Duration) {
        self.statuses.insert(kind, JobStatus::Finished { duration });
    }

    /// Current status of a job.
    #[must_use]
    pub fn status(&self, kind: JobKind) -> JobStatus {
        self.statuses
            .get(&kind)
            .map(|entry| *entry.value())
            .unwrap_or_default()
    }

    /// Current status of a job looked up by name.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::UnknownJob`] for a name other than
    /// `accounts`, `yearly` or `fs`.
    pub fn status_by_name(&self, name: &str) -> Result<JobStatus, ProgressError> {
        let kind: JobKind = name.parse()?;
        Ok(self.status(kind))
    }

    /// Status of every job in reporting order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<(JobKind, JobStatus)> {
        JobKind::ALL
            .iter()
            .map(|&kind| (kind, self.status(kind)))
            .collect()
    }
}

impl Default for ProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}
