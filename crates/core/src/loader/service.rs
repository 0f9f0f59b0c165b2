//! Concurrent ledger loading from a source directory.

use std::path::{Path, PathBuf};

use futures::future::try_join_all;
use tracing::{debug, info};

use super::error::LoadError;
use crate::ledger::{LedgerCache, LedgerRow, parse_records};

/// Loads every eligible ledger file of a directory into a fresh cache.
///
/// All eligible files are read concurrently with no cap on the number of
/// in-flight reads. This is fine for the handful of files a ledger
/// directory usually holds, but very large directories will open one file
/// handle per file at once.
#[derive(Debug, Clone)]
pub struct LedgerLoader {
    source_dir: PathBuf,
    extension: String,
}

impl LedgerLoader {
    /// Creates a loader for `source_dir` accepting files with `extension`
    /// (given without the leading dot).
    #[must_use]
    pub fn new(source_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            source_dir: source_dir.into(),
            extension: extension.into(),
        }
    }

    /// Directory scanned by this loader.
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Returns true if the file name of `path` ends with `.<extension>`.
    ///
    /// A bare `.csv` is a valid name, even though it has no extension as far
    /// as [`Path::extension`] is concerned.
    #[must_use]
    pub fn is_eligible(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(self.extension.as_str()))
            .is_some_and(|stem| stem.ends_with('.'))
    }

    /// Lists the eligible files of the source directory, sorted by path.
    ///
    /// Subdirectories are not descended into.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::DirectoryUnreadable`] if the directory cannot be
    /// listed.
    pub async fn discover(&self) -> Result<Vec<PathBuf>, LoadError> {
        let unreadable = |e| LoadError::directory_unreadable(&self.source_dir, e);

        let mut entries = tokio::fs::read_dir(&self.source_dir)
            .await
            .map_err(unreadable)?;

        let mut paths = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(unreadable)? {
            let path = entry.path();
            let file_type = entry.file_type().await.map_err(unreadable)?;
            if file_type.is_file() && self.is_eligible(&path) {
                paths.push(path);
            }
        }

        paths.sort();
        Ok(paths)
    }

    /// Loads all eligible files into a new cache.
    ///
    /// The cache is only returned once every file has been read and parsed.
    ///
    /// # Errors
    ///
    /// Fails if the directory cannot be listed or if any single file cannot
    /// be read. There is no partial result.
    pub async fn load(&self) -> Result<LedgerCache, LoadError> {
        let paths = self.discover().await?;
        info!(
            source_dir = %self.source_dir.display(),
            files = paths.len(),
            "Loading ledger files"
        );

        let files = try_join_all(paths.iter().map(|path| Self::load_file(path))).await?;

        let mut cache = LedgerCache::new();
        for (name, rows) in files {
            cache.set(name, rows);
        }

        info!(
            files = cache.len(),
            rows = cache.row_count(),
            "Ledger cache populated"
        );
        Ok(cache)
    }

    async fn load_file(path: &Path) -> Result<(String, Vec<LedgerRow>), LoadError> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LoadError::file_unreadable(path, e))?;
        let rows = parse_records(&text);

        let name = path
            .file_name()
            .map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy())
            .into_owned();
        debug!(file = %name, rows = rows.len(), "Parsed ledger file");

        Ok((name, rows))
    }
}
