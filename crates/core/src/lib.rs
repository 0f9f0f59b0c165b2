//! Ledger ingestion and report generation for Tally.
//!
//! This crate loads a directory of ledger files into memory and derives
//! three reports from it. It has ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `ledger` - Ledger rows, record parsing and the in-memory cache
//! - `loader` - Concurrent discovery and loading of ledger files
//! - `reports` - Account balances, yearly cash flow, financial statement
//! - `progress` - Per-job status tracking
//! - `pipeline` - Load-then-fan-out run orchestration

pub mod ledger;
pub mod loader;
pub mod pipeline;
pub mod progress;
pub mod reports;

pub use pipeline::{PipelineError, ReportPipeline, RunSummary};
pub use progress::{JobKind, JobStatus};
