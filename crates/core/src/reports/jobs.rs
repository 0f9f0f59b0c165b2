//! Report jobs: aggregate, render, write, and track progress.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use super::error::ReportError;
use super::service::ReportService;
use crate::ledger::LedgerCache;
use crate::progress::{JobKind, ProgressTracker};

/// Runs one report job against a fully loaded cache.
///
/// Marks the job `starting`, renders the report, writes it to
/// `output_dir/<job file name>` and marks the job `finished` with the
/// elapsed time. The yearly and statement jobs skip any cached file named
/// like their own output.
///
/// The file is written to a temporary sibling and then renamed, so a failed
/// write never leaves a truncated report behind.
///
/// # Errors
///
/// Returns [`ReportError::Write`] if the report cannot be written. The job
/// then stays `starting`.
pub async fn run_job(
    kind: JobKind,
    cache: &LedgerCache,
    tracker: &ProgressTracker,
    output_dir: &Path,
) -> Result<PathBuf, ReportError> {
    let started = Instant::now();
    tracker.start(kind);

    let own_file = kind.output_file_name();
    let body = match kind {
        JobKind::Accounts => ReportService::account_balances(cache.rows()).to_csv(),
        JobKind::Yearly => ReportService::yearly_cash_flow(cache.rows_excluding(own_file)).to_csv(),
        JobKind::Fs => {
            let statement = ReportService::financial_statement(cache.rows_excluding(own_file));
            info!(
                total_assets = %statement.total_assets,
                liabilities_and_equity = %statement.liabilities_and_equity(),
                balanced = statement.is_balanced(),
                "Financial statement totals"
            );
            statement.to_csv()
        }
    };

    let path = output_dir.join(own_file);
    write_atomically(&path, body).await?;

    let elapsed = started.elapsed();
    tracker.finish(kind, elapsed);
    info!(
        job = %kind,
        path = %path.display(),
        elapsed_ms = elapsed.as_millis(),
        "Report written"
    );

    Ok(path)
}

async fn write_atomically(path: &Path, body: String) -> Result<(), ReportError> {
    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = PathBuf::from(staging);

    let write_error = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let written = match tokio::fs::write(&staging, body).await {
        Ok(()) => tokio::fs::rename(&staging, path).await,
        Err(e) => Err(e),
    };
    if let Err(e) = written {
        let _ = tokio::fs::remove_file(&staging).await;
        return Err(write_error(e));
    }
    Ok(())
}
