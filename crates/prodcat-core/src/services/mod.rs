//! Core services - the application's business logic layer.
//!
//! Services here are pure orchestrators over ports; they don't know about
//! concrete implementations.

mod product_service;

pub use product_service::{ProductService, apply_limit};
