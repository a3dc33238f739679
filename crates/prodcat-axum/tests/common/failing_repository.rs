//! Repository double whose every operation fails with a storage error.

use async_trait::async_trait;
use prodcat_core::{NewProduct, Product, ProductRepository, RepositoryError};

/// Detail that must never reach an HTTP client.
pub const SECRET_DETAIL: &str = "failed to read /srv/secret/products.json: permission denied";

pub struct FailingRepository;

fn failure() -> RepositoryError {
    RepositoryError::Storage(SECRET_DETAIL.to_string())
}

#[async_trait]
impl ProductRepository for FailingRepository {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        Err(failure())
    }

    async fn find_by_id(&self, _id: u64) -> Result<Option<Product>, RepositoryError> {
        Err(failure())
    }

    async fn add(&self, _product: &NewProduct) -> Result<Product, RepositoryError> {
        Err(failure())
    }

    async fn update(&self, _id: u64, _product: &NewProduct) -> Result<Product, RepositoryError> {
        Err(failure())
    }

    async fn remove(&self, _id: u64) -> Result<Product, RepositoryError> {
        Err(failure())
    }
}
