//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the CLI wires the JSON store into
//! the core `ProductService`. Command handlers receive the composed
//! context and delegate work to it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use prodcat_core::{ProductRepository, ProductService};
use prodcat_store::JsonProductRepository;

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path to the catalog JSON file.
    pub catalog_path: PathBuf,
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Product service over the JSON store.
    pub products: ProductService,
    /// Absolute path of the catalog file.
    pub catalog_path: PathBuf,
}

impl CliContext {
    /// Access the product service.
    pub fn products(&self) -> &ProductService {
        &self.products
    }
}

/// Build the CLI context from configuration.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext> {
    let catalog_path = std::path::absolute(&config.catalog_path).map_err(|e| {
        CliError::Config(format!(
            "cannot resolve catalog path {}: {e}",
            config.catalog_path.display()
        ))
    })?;
    tracing::debug!(catalog_path = %catalog_path.display(), "CLI bootstrap resolved catalog");

    let repo: Arc<dyn ProductRepository> =
        Arc::new(JsonProductRepository::new(catalog_path.clone()));

    Ok(CliContext {
        products: ProductService::new(repo),
        catalog_path,
    })
}
