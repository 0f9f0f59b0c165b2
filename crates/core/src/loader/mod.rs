//! Ledger file discovery and loading.

mod error;
mod service;

pub use error::LoadError;
pub use service::LedgerLoader;
