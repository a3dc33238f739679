//! Shared helpers for prodcat-axum integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use prodcat_axum::{AxumContext, CorsConfig, create_router};
use prodcat_core::{NewProduct, Product, ProductRepository};
use prodcat_store::JsonProductRepository;

pub mod failing_repository;

/// Router over a JSON catalog at `path`.
pub fn app_for(path: &Path) -> Router {
    app_with(Arc::new(JsonProductRepository::new(path)))
}

/// Router over an arbitrary repository.
pub fn app_with(repo: Arc<dyn ProductRepository>) -> Router {
    create_router(AxumContext::new(repo), &CorsConfig::AllowAll)
}

/// Product fields numbered `n`, matching the sample catalog entries.
pub fn sample_fields(n: u64) -> NewProduct {
    NewProduct {
        title: format!("Product {n}"),
        description: format!("Description for Product {n}"),
        price: 19.99,
        thumbnail: format!("product{n}.jpg"),
        code: format!("P{n}"),
        stock: 100,
    }
}

/// Seed the catalog at `path` with `count` products and return them.
pub async fn seed(path: &Path, count: u64) -> Vec<Product> {
    let repo = JsonProductRepository::new(path);
    let mut created = Vec::new();
    for n in 1..=count {
        created.push(repo.add(&sample_fields(n)).await.unwrap());
    }
    created
}

/// Send a request and return the status and raw body.
pub async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

/// GET `uri` and parse the body as JSON.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(app, Method::GET, uri).await;
    let value = serde_json::from_slice(&body)
        .unwrap_or_else(|e| panic!("Expected JSON body from {uri}, got error {e}: {body:?}"));
    (status, value)
}
