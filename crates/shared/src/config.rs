//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Ledger ingestion and report output configuration.
    #[serde(default)]
    pub ledger: LedgerConfig,
}

/// Ledger configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Directory scanned for ledger files.
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,
    /// Directory the three reports are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// File extension (without the dot) a ledger file must carry.
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_extension() -> String {
    "csv".to_string()
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_dir: default_output_dir(),
            extension: default_extension(),
        }
    }
}

impl LedgerConfig {
    /// Creates a ledger configuration for the given directories.
    #[must_use]
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            extension: default_extension(),
        }
    }

    /// Sets the ledger file extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
