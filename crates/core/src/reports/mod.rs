//! Financial report generation.
//!
//! This module turns the ledger cache into three reports:
//! - Account Balances
//! - Yearly Cash Flow
//! - Financial Statement (income statement and balance sheet)
//!
//! Aggregation is pure and lives in [`ReportService`]; rendering to CSV text
//! lives in `render`; [`jobs`] wraps both with progress tracking and file
//! output.

pub mod error;
pub mod jobs;
mod render;
pub mod service;
pub mod taxonomy;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use jobs::run_job;
pub use service::ReportService;
pub use types::*;
