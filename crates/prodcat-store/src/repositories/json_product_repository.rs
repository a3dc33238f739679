//! JSON file implementation of the `ProductRepository` trait.

use std::ffi::OsString;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use prodcat_core::{NewProduct, Product, ProductRepository, RepositoryError, next_product_id};

const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Distinguishes staging files of writes within this process.
static STAGING_SEQ: AtomicU64 = AtomicU64::new(0);

fn storage_error(action: &str, path: &Path, err: &io::Error) -> RepositoryError {
    RepositoryError::Storage(format!("failed to {action} {}: {err}", path.display()))
}

/// Catalog store over a single JSON file.
///
/// The file holds a JSON array of products in insertion order. There is no
/// cache: every call reads the file again, and every mutation rewrites it in
/// full.
///
/// Mutations take an in-process write lock for the whole read-modify-write
/// cycle, so concurrent `add` calls through one repository never hand out
/// the same ID. Readers never wait on it. Other processes writing the same
/// file are not coordinated with.
pub struct JsonProductRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonProductRepository {
    /// Create a repository for the catalog at `path`.
    ///
    /// The file does not need to exist; the first write creates it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `products` and replace the catalog file with them.
    ///
    /// Waits for any in-flight mutation to finish first.
    pub async fn persist(&self, products: &[Product]) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;
        self.write_catalog(products)
            .await
            .map_err(|e| e.context("Error saving products"))
    }

    /// Read the catalog, treating a missing or unparseable file as empty.
    ///
    /// Other read failures (permissions, a directory in place of the file)
    /// are returned as `RepositoryError::Storage`.
    async fn load(&self) -> Result<Vec<Product>, RepositoryError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(storage_error("read", &self.path, &e)),
        };

        match serde_json::from_slice(&bytes) {
            Ok(products) => Ok(products),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Catalog file is not a valid product list, treating it as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn write_catalog(&self, products: &[Product]) -> Result<(), RepositoryError> {
        let json = serde_json::to_vec_pretty(products)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error("create directory", parent, &e))?;
        }

        // Write next to the target and rename over it, so readers see either
        // the old document or the new one.
        let staging = self.staging_path();
        fs::write(&staging, &json)
            .await
            .map_err(|e| storage_error("write", &staging, &e))?;
        if let Err(e) = fs::rename(&staging, &self.path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(storage_error("replace", &self.path, &e));
        }

        debug!(
            path = %self.path.display(),
            products = products.len(),
            "Catalog written"
        );
        Ok(())
    }

    /// Unique per write, so repositories sharing a path never share a staging file.
    fn staging_path(&self) -> PathBuf {
        let mut name = OsString::from(".");
        name.push(
            self.path
                .file_name()
                .unwrap_or_else(|| std::ffi::OsStr::new("catalog")),
        );
        let seq = STAGING_SEQ.fetch_add(1, Ordering::Relaxed);
        name.push(format!(".{}.{seq}.tmp", std::process::id()));
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl ProductRepository for JsonProductRepository {
    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        match self.load().await {
            Ok(products) => Ok(products),
            Err(e) => {
                warn!(error = %e, "Failed to read catalog, returning an empty list");
                Ok(Vec::new())
            }
        }
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Product>, RepositoryError> {
        let products = self
            .load()
            .await
            .map_err(|e| e.context("Error getting product by ID"))?;
        Ok(products.into_iter().find(|p| p.id == id))
    }

    async fn add(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let _guard = self.write_lock.lock().await;

        let result: Result<Product, RepositoryError> = async {
            let mut products = self.load().await?;
            let id = next_product_id(&products).ok_or_else(|| {
                RepositoryError::Constraint("product ID space exhausted".to_string())
            })?;
            let created = product.clone().into_product(id);
            products.push(created.clone());
            self.write_catalog(&products).await?;
            Ok(created)
        }
        .await;

        let created = result.map_err(|e| e.context("Error adding product"))?;
        debug!(id = created.id, "Product added");
        Ok(created)
    }

    async fn update(&self, id: u64, product: &NewProduct) -> Result<Product, RepositoryError> {
        let _guard = self.write_lock.lock().await;

        let result: Result<Product, RepositoryError> = async {
            let mut products = self.load().await?;
            let slot = products
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| RepositoryError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;
            *slot = product.clone().into_product(id);
            let updated = slot.clone();
            self.write_catalog(&products).await?;
            Ok(updated)
        }
        .await;

        let updated = result.map_err(|e| e.context("Error updating product"))?;
        debug!(id, "Product updated");
        Ok(updated)
    }

    async fn remove(&self, id: u64) -> Result<Product, RepositoryError> {
        let _guard = self.write_lock.lock().await;

        let result: Result<Product, RepositoryError> = async {
            let mut products = self.load().await?;
            let index = products
                .iter()
                .position(|p| p.id == id)
                .ok_or_else(|| RepositoryError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;
            let removed = products.remove(index);
            self.write_catalog(&products).await?;
            Ok(removed)
        }
        .await;

        let removed = result.map_err(|e| e.context("Error deleting product"))?;
        debug!(id, "Product removed");
        Ok(removed)
    }
}
