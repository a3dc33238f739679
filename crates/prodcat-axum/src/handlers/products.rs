//! Product handlers - read-only catalog access.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};

use crate::dto::{ListProductsParams, leading_integer};
use crate::error::{HttpError, PRODUCT_NOT_FOUND};
use crate::state::AppState;
use prodcat_core::Product;

/// List products, optionally limited to the first `limit` entries.
///
/// A query string that can't be decoded is treated like a missing one.
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListProductsParams>, QueryRejection>,
) -> Result<Json<Vec<Product>>, HttpError> {
    let limit = query.ok().and_then(|Query(params)| params.parsed_limit());
    Ok(Json(state.products.list(limit).await?))
}

/// Get a single product by ID.
///
/// The ID is the integer at the start of `pid`, so `/products/1.5` reads
/// product 1. A `pid` with no leading non-negative integer matches nothing.
pub async fn get(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<Json<Product>, HttpError> {
    let product = match leading_integer(&pid).and_then(|n| u64::try_from(n).ok()) {
        Some(id) => state.products.get(id).await?,
        None => None,
    };

    product
        .map(Json)
        .ok_or_else(|| HttpError::NotFound(PRODUCT_NOT_FOUND.to_string()))
}
