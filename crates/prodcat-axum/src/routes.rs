//! Route definitions and router construction.
//!
//! Only read routes are exposed. The store supports writes, but they are
//! reachable through the CLI alone.

use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::error::HttpError;
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Catalog routes, typed as `Router<AppState>` without state applied.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(handlers::products::list))
        .route("/products/{pid}", get(handlers::products::get))
}

/// Create the main Axum router.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{pid}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/health", get(health_check))
        .merge(api_routes().with_state(state))
        .fallback(not_found)
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}

/// JSON 404 for paths outside the catalog API.
async fn not_found() -> HttpError {
    HttpError::NotFound("Not found".to_string())
}
