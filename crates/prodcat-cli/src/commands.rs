//! Main commands enum and shared argument groups.

use clap::{Args, Subcommand};
use prodcat_axum::bootstrap::DEFAULT_PORT;
use prodcat_core::NewProduct;

/// Available commands for the catalog tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Serve the catalog over HTTP (read-only)
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PRODCAT_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// List products in insertion order
    List {
        /// Show only the first N products
        #[arg(short, long, allow_negative_numbers = true)]
        limit: Option<i64>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show a single product
    Get {
        /// Product ID
        id: u64,
        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Add a product to the catalog
    Add {
        #[command(flatten)]
        fields: ProductFields,
    },

    /// Replace every field of an existing product
    Update {
        /// Product ID
        id: u64,
        #[command(flatten)]
        fields: ProductFields,
    },

    /// Remove a product from the catalog
    Remove {
        /// Product ID
        id: u64,
    },
}

/// Every product field except the ID, which the store assigns.
#[derive(Debug, Clone, Args)]
pub struct ProductFields {
    /// Product title
    #[arg(long)]
    pub title: String,
    /// Product description
    #[arg(long)]
    pub description: String,
    /// Unit price
    #[arg(long)]
    pub price: f64,
    /// Thumbnail image reference
    #[arg(long)]
    pub thumbnail: String,
    /// Product code
    #[arg(long)]
    pub code: String,
    /// Units in stock
    #[arg(long, allow_negative_numbers = true)]
    pub stock: i64,
}

impl From<ProductFields> for NewProduct {
    fn from(fields: ProductFields) -> Self {
        Self {
            title: fields.title,
            description: fields.description,
            price: fields.price,
            thumbnail: fields.thumbnail,
            code: fields.code,
            stock: fields.stock,
        }
    }
}
