//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from CoreError to exit codes and user-facing messages.

use prodcat_core::{CoreError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The requested product doesn't exist.
    #[error("{0}")]
    NotFound(String),

    /// Reading or writing the catalog failed.
    #[error("Catalog error: {0}")]
    Storage(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 1: General error (including a missing product)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound(_) => 1,
            CliError::Storage(_) => 74, // EX_IOERR
            CliError::Config(_) => 78,  // EX_CONFIG
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => CliError::NotFound(format!("Product {id} not found")),
            CoreError::Repository(RepositoryError::NotFound(msg)) => CliError::NotFound(msg),
            CoreError::Repository(repo_err) => CliError::Storage(repo_err.to_string()),
        }
    }
}
