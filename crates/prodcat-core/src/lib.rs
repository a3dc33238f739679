#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{NewProduct, Product, next_product_id};
pub use ports::{CoreError, ProductRepository, RepositoryError};
pub use services::{ProductService, apply_limit};
