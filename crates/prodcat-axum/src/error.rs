//! Axum-specific error types and mappings.
//!
//! This module provides the error type for the Axum adapter and the mapping
//! from `CoreError` to HTTP status codes and response bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use prodcat_core::{CoreError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

/// Message returned for a missing product.
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Message returned for every unexpected failure.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Resource not found. The message is sent to the client.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server error. The detail is logged, never sent.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR.to_string(),
                )
            }
        };

        (status, axum::Json(ErrorBody { error: message })).into_response()
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(_) => HttpError::NotFound(PRODUCT_NOT_FOUND.to_string()),
            CoreError::Repository(repo_err) => repo_err.into(),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => HttpError::NotFound(msg),
            other => HttpError::Internal(other.to_string()),
        }
    }
}
