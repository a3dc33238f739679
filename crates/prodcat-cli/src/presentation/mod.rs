//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no catalog access, no domain rules.

pub mod product_display;
pub mod tables;

// Re-export commonly used items
pub use product_display::display_product;
pub use tables::{print_separator, truncate_string};
