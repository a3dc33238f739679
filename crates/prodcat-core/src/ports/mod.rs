//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No filesystem or serde_json types in any signature
//! - Traits are minimal and CRUD-focused for repositories

pub mod product_repository;

use thiserror::Error;

pub use product_repository::ProductRepository;

#[cfg(test)]
pub use product_repository::MockProductRepository;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (file I/O,
/// JSON encoding) and provides a clean interface for services to handle
/// storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (read or write failure).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., the ID space is exhausted).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl RepositoryError {
    /// Prefix the message with the name of the failing operation.
    ///
    /// `NotFound` is left untouched so callers can keep matching on its
    /// message verbatim.
    #[must_use]
    pub fn context(self, operation: &str) -> Self {
        match self {
            Self::NotFound(msg) => Self::NotFound(msg),
            Self::Storage(msg) => Self::Storage(format!("{operation}: {msg}")),
            Self::Serialization(msg) => Self::Serialization(format!("{operation}: {msg}")),
            Self::Constraint(msg) => Self::Constraint(format!("{operation}: {msg}")),
        }
    }

    /// Whether this error reports a missing entity.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Core error type for semantic domain errors.
///
/// This is the canonical error type used across the core domain.
/// Adapters should map this to their own error types (HTTP status codes,
/// CLI exit codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// No product with the given ID exists.
    #[error("Product not found: {0}")]
    ProductNotFound(u64),
}
