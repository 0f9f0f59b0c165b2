//! Ledger rows and the in-memory ledger cache.
//!
//! - Ledger rows (date, account, description, debit, credit)
//! - Record parsing from raw file text
//! - The per-run cache of parsed files

pub mod cache;
pub mod parser;
pub mod row;

pub use cache::LedgerCache;
pub use parser::parse_records;
pub use row::LedgerRow;
