//! Repository implementations backed by JSON files.
//!
//! File paths and `serde_json` are confined to this module and never
//! exposed through the port trait signatures.

mod json_product_repository;

pub use json_product_repository::JsonProductRepository;
