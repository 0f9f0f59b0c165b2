//! Tally report runner
//!
//! Loads the configured ledger directory, writes the three reports and
//! prints each job's status. An optional job name argument (`accounts`,
//! `yearly` or `fs`) limits the printed status to that job.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_core::{JobKind, ReportPipeline};
use tally_shared::{AppConfig, AppError, AppResult};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally=info,tally_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = err.error_code(), error = %err, "Report run failed");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run() -> AppResult<()> {
    let job = std::env::args()
        .nth(1)
        .map(|name| name.parse::<JobKind>())
        .transpose()?;

    let config = AppConfig::load()?;
    info!(
        source_dir = %config.ledger.source_dir.display(),
        output_dir = %config.ledger.output_dir.display(),
        "Configuration loaded"
    );

    let pipeline = ReportPipeline::new(config.ledger);
    let outcome = pipeline.run().await;

    let statuses = pipeline.tracker().snapshot();
    for (kind, status) in statuses {
        if job.is_none_or(|wanted| wanted == kind) {
            println!("{kind}: {status}");
        }
    }

    let summary = outcome.map_err(AppError::from)?;
    info!(
        files = summary.files_loaded,
        rows = summary.rows_loaded,
        reports = summary.outputs.len(),
        "Reports generated"
    );
    Ok(())
}
