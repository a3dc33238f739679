//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (files, HTTP, terminals).

mod product;

pub use product::{NewProduct, Product, next_product_id};
