//! Serve command handler.
//!
//! Runs the read-only HTTP server over the configured catalog.

use anyhow::Result;
use prodcat_axum::{ServerConfig, start_server};

use crate::bootstrap::CliContext;

/// Execute the serve command. Runs until the server stops.
pub async fn execute(ctx: &CliContext, port: u16) -> Result<()> {
    let config = ServerConfig::with_defaults()
        .with_port(port)
        .with_catalog_path(&ctx.catalog_path);
    start_server(config).await
}
