//! Product repository trait definition.
//!
//! This port defines the interface for catalog persistence operations.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{NewProduct, Product};

/// Repository for product persistence operations.
///
/// The catalog is an ordered sequence: `list` returns products in
/// insertion order and `add` appends to the end.
///
/// # Design Rules
///
/// - CRUD-only: list, find, add, update, remove
/// - ID assignment belongs to the implementation, never the caller
/// - Truncation and presentation belong in `ProductService` or adapters
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products in insertion order.
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Find a product by its ID.
    ///
    /// A missing product is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: u64) -> Result<Option<Product>, RepositoryError>;

    /// Append a new product and return it with its assigned ID.
    async fn add(&self, product: &NewProduct) -> Result<Product, RepositoryError>;

    /// Replace every field of an existing product, keeping its ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the product doesn't exist.
    async fn update(&self, id: u64, product: &NewProduct) -> Result<Product, RepositoryError>;

    /// Remove a product by ID and return the removed record.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the product doesn't exist.
    async fn remove(&self, id: u64) -> Result<Product, RepositoryError>;
}
