//! Per-job progress tracking.
//!
//! Each report job owns one entry and moves it from `idle` to `starting`
//! when it begins and to `finished` (with its wall time) when it ends.

pub mod error;
pub mod tracker;
pub mod types;

pub use error::ProgressError;
pub use tracker::ProgressTracker;
pub use types::{JobKind, JobStatus};
