//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. The JSON store is instantiated here.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use prodcat_core::{ProductRepository, ProductService};
use prodcat_store::JsonProductRepository;

/// Port the server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 8080;

/// Catalog file used unless configured otherwise, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "products.json";

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
///
/// Fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the catalog JSON file.
    pub catalog_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ServerConfig {
    /// Create config with the default port and catalog path.
    pub fn with_defaults() -> Self {
        Self {
            port: DEFAULT_PORT,
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            cors: CorsConfig::default(),
        }
    }

    /// Set the listening port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the catalog file path.
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// Product service over the configured repository.
    pub products: Arc<ProductService>,
}

impl AxumContext {
    /// Build a context over any repository implementation.
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self {
            products: Arc::new(ProductService::new(repo)),
        }
    }
}

/// Bootstrap the Axum server context from configuration.
///
/// Resolves the catalog path to an absolute one so later working-directory
/// changes can't redirect reads and writes.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let catalog_path = std::path::absolute(&config.catalog_path).with_context(|| {
        format!(
            "Failed to resolve catalog path {}",
            config.catalog_path.display()
        )
    })?;

    let exists = tokio::fs::try_exists(&catalog_path).await.unwrap_or(false);
    tracing::info!(
        target: "prodcat.paths",
        catalog_path = %catalog_path.display(),
        exists,
        "Axum bootstrap resolved catalog"
    );

    let repo: Arc<dyn ProductRepository> = Arc::new(JsonProductRepository::new(catalog_path));
    Ok(AxumContext::new(repo))
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("prodcat server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
