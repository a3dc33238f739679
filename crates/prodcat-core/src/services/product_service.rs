//! Product service - orchestrates catalog operations.

use std::sync::Arc;

use crate::domain::{NewProduct, Product};
use crate::ports::{CoreError, ProductRepository, RepositoryError};

/// Truncate a product list the way a `limit` parameter asks for.
///
/// `None` keeps everything. A non-negative limit keeps at most that many
/// leading products. A negative limit drops that many trailing products.
pub fn apply_limit(mut products: Vec<Product>, limit: Option<i64>) -> Vec<Product> {
    let Some(limit) = limit else {
        return products;
    };
    let keep = if limit >= 0 {
        usize::try_from(limit).unwrap_or(usize::MAX)
    } else {
        let drop = usize::try_from(limit.unsigned_abs()).unwrap_or(usize::MAX);
        products.len().saturating_sub(drop)
    };
    products.truncate(keep);
    products
}

/// Service for product operations.
///
/// This service delegates to the injected `ProductRepository` and
/// translates repository "not found" failures into
/// `CoreError::ProductNotFound`.
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Create a new product service with the given repository.
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// List products in insertion order, optionally truncated.
    pub async fn list(&self, limit: Option<i64>) -> Result<Vec<Product>, CoreError> {
        let products = self.repo.list().await?;
        Ok(apply_limit(products, limit))
    }

    /// Get a product by ID. `Ok(None)` when it doesn't exist.
    pub async fn get(&self, id: u64) -> Result<Option<Product>, CoreError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    /// Find a product by ID. Returns error if not found.
    pub async fn find(&self, id: u64) -> Result<Product, CoreError> {
        self.get(id).await?.ok_or(CoreError::ProductNotFound(id))
    }

    /// Add a new product.
    pub async fn add(&self, product: NewProduct) -> Result<Product, CoreError> {
        Ok(self.repo.add(&product).await?)
    }

    /// Replace all fields of a product, keeping its ID.
    pub async fn update(&self, id: u64, product: NewProduct) -> Result<Product, CoreError> {
        self.repo
            .update(id, &product)
            .await
            .map_err(|e| not_found_as_product(e, id))
    }

    /// Remove a product. Returns the removed product.
    pub async fn remove(&self, id: u64) -> Result<Product, CoreError> {
        self.repo
            .remove(id)
            .await
            .map_err(|e| not_found_as_product(e, id))
    }
}

fn not_found_as_product(err: RepositoryError, id: u64) -> CoreError {
    if err.is_not_found() {
        CoreError::ProductNotFound(id)
    } else {
        CoreError::Repository(err)
    }
}
