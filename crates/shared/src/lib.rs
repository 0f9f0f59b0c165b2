//! Shared types, errors, and configuration for Tally.
//!
//! This crate provides common pieces used across all other crates:
//! - Amount parsing and formatting with decimal precision
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, LedgerConfig};
pub use error::{AppError, AppResult};
