//! Report pipeline orchestration.

use std::path::PathBuf;
use std::sync::Arc;

use futures::future::join_all;
use tally_shared::LedgerConfig;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::error::PipelineError;
use crate::ledger::LedgerCache;
use crate::loader::LedgerLoader;
use crate::progress::{JobKind, JobStatus, ProgressError, ProgressTracker};
use crate::reports::{ReportError, run_job};

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of ledger files loaded.
    pub files_loaded: usize,
    /// Number of ledger rows loaded.
    pub rows_loaded: usize,
    /// Written report files, in job order.
    pub outputs: Vec<PathBuf>,
}

/// Owns the ledger cache and the progress tracker for one reporting setup.
///
/// Instances are independent of each other. Within one instance, each run
/// builds a complete new cache generation before any job starts, then
/// publishes it; jobs read the generation they were started with.
///
/// Overlapping runs on the same instance are not serialized: the later run
/// replaces the published cache and both write the same output files.
#[derive(Debug)]
pub struct ReportPipeline {
    config: LedgerConfig,
    cache: RwLock<Arc<LedgerCache>>,
    tracker: ProgressTracker,
}

impl ReportPipeline {
    /// Creates a pipeline with an empty cache and every job `idle`.
    #[must_use]
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            cache: RwLock::new(Arc::new(LedgerCache::new())),
            tracker: ProgressTracker::new(),
        }
    }

    /// Pipeline configuration.
    #[must_use]
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Handle to the progress tracker.
    #[must_use]
    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    /// The currently published cache generation.
    pub async fn cache(&self) -> Arc<LedgerCache> {
        Arc::clone(&*self.cache.read().await)
    }

    /// Status of a job looked up by name.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::UnknownJob`] for an unrecognized name.
    pub fn status(&self, job: &str) -> Result<JobStatus, ProgressError> {
        self.tracker.status_by_name(job)
    }

    /// Loads the ledger, then runs the three report jobs concurrently.
    ///
    /// Returns once every job has ended. If any job fails the others still
    /// run to completion, and the first failure in job order is returned.
    ///
    /// # Errors
    ///
    /// Fails without starting any job if the ledger cannot be loaded or the
    /// output directory cannot be created; otherwise fails if any job fails.
    pub async fn run(&self) -> Result<RunSummary, PipelineError> {
        let loader = LedgerLoader::new(&self.config.source_dir, self.config.extension.as_str());
        let cache = Arc::new(loader.load().await?);
        *self.cache.write().await = Arc::clone(&cache);

        let output_dir = self.config.output_dir.clone();
        tokio::fs::create_dir_all(&output_dir)
            .await
            .map_err(|source| ReportError::OutputDirectory {
                path: output_dir.clone(),
                source,
            })?;

        let handles = JobKind::ALL.map(|kind| {
            let cache = Arc::clone(&cache);
            let tracker = self.tracker.clone();
            let output_dir = output_dir.clone();
            tokio::spawn(async move { run_job(kind, &cache, &tracker, &output_dir).await })
        });
        let results = join_all(handles).await;

        let mut outputs = Vec::with_capacity(JobKind::ALL.len());
        let mut first_error = None;
        for (kind, result) in JobKind::ALL.into_iter().zip(results) {
            let failure = match result {
                Ok(Ok(path)) => {
                    outputs.push(path);
                    continue;
                }
                Ok(Err(e)) => PipelineError::from(e),
                Err(join_error) => PipelineError::JobAborted {
                    job: kind,
                    reason: join_error.to_string(),
                },
            };
            error!(job = %kind, error = %failure, "Report job failed");
            if first_error.is_none() {
                first_error = Some(failure);
            }
        }

        if let Some(err) = first_error {
            return Err(err);
        }

        let summary = RunSummary {
            files_loaded: cache.len(),
            rows_loaded: cache.row_count(),
            outputs,
        };
        info!(
            files = summary.files_loaded,
            rows = summary.rows_loaded,
            "Report run complete"
        );
        Ok(summary)
    }
}
