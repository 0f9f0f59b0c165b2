//! In-memory ledger cache.
//!
//! Maps a source file identifier (its file name) to the rows parsed from it.
//! One cache is built per run by the loader and then shared read-only with
//! every report job.

use std::collections::BTreeMap;

use super::row::LedgerRow;

/// Parsed ledger files keyed by file name.
///
/// Iteration is in ascending file-name order, so repeated runs over the same
/// directory visit rows in the same order.
#[derive(Debug, Clone, Default)]
pub struct LedgerCache {
    files: BTreeMap<String, Vec<LedgerRow>>,
}

impl LedgerCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the rows for a file, replacing any rows previously stored
    /// under the same name.
    pub fn set(&mut self, name: impl Into<String>, rows: Vec<LedgerRow>) {
        self.files.insert(name.into(), rows);
    }

    /// Returns the rows stored for a file.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[LedgerRow]> {
        self.files.get(name).map(Vec::as_slice)
    }

    /// Iterates over `(file name, rows)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[LedgerRow])> {
        self.files
            .iter()
            .map(|(name, rows)| (name.as_str(), rows.as_slice()))
    }

    /// Iterates over every row of every file.
    pub fn rows(&self) -> impl Iterator<Item = &LedgerRow> {
        self.files.values().flatten()
    }

    /// Iterates over every row of every file except `excluded`.
    pub fn rows_excluding<'a>(&'a self, excluded: &'a str) -> impl Iterator<Item = &'a LedgerRow> {
        self.files
            .iter()
            .filter(move |(name, _)| name.as_str() != excluded)
            .flat_map(|(_, rows)| rows)
    }

    /// Returns the cached file names in iteration order.
    #[must_use]
    pub fn file_names(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    /// Number of cached files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if no file is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total number of rows across all files.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }
}
