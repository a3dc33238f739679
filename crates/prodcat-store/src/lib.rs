#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod repositories;

// Re-export repository implementations
pub use repositories::JsonProductRepository;
