//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A source or output file could not be read or written.
    #[error("I/O error: {0}")]
    Io(String),

    /// The caller asked for something that does not exist.
    #[error("Usage error: {0}")]
    Usage(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) => 2,
            Self::Config(_) => 3,
            Self::Io(_) => 4,
            Self::Internal(_) => 1,
        }
    }

    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Usage(_) => "USAGE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(AppError::Usage(String::new()).exit_code(), 2);
        assert_eq!(AppError::Config(String::new()).exit_code(), 3);
        assert_eq!(AppError::Io(String::new()).exit_code(), 4);
        assert_eq!(AppError::Internal(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::Config(String::new()).error_code(), "CONFIG_ERROR");
        assert_eq!(AppError::Io(String::new()).error_code(), "IO_ERROR");
        assert_eq!(AppError::Usage(String::new()).error_code(), "USAGE_ERROR");
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Config("msg".into()).to_string(),
            "Configuration error: msg"
        );
        assert_eq!(AppError::Io("msg".into()).to_string(), "I/O error: msg");
        assert_eq!(
            AppError::Usage("msg".into()).to_string(),
            "Usage error: msg"
        );
        assert_eq!(
            AppError::Internal("msg".into()).to_string(),
            "Internal error: msg"
        );
    }
}
