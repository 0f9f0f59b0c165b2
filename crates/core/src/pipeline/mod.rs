//! Run orchestration: load the ledger, then fan out the report jobs.

pub mod error;
pub mod orchestrator;

pub use error::PipelineError;
pub use orchestrator::{ReportPipeline, RunSummary};
