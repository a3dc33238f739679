//! Product domain types.
//!
//! A catalog entry has a fixed schema. Entries with missing or mistyped
//! fields fail deserialization as a whole, which storage adapters treat
//! as an unreadable catalog.

use serde::{Deserialize, Serialize};

/// A product that exists in the catalog with an assigned ID.
///
/// Use `NewProduct` for products that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-unique identifier, assigned by the store.
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Unit price. Fractional values are allowed.
    pub price: f64,
    /// Image reference, opaque to the store.
    pub thumbnail: String,
    /// Merchant-facing product code.
    pub code: String,
    /// Units in stock.
    pub stock: i64,
}

/// Product fields without an ID.
///
/// This is the input for both creation and full replacement. The ID is
/// never client-supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: i64,
}

impl NewProduct {
    /// Attach an ID, producing a persisted product.
    #[must_use]
    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            thumbnail: self.thumbnail,
            code: self.code,
            stock: self.stock,
        }
    }
}

impl Product {
    /// Convert this product to a `NewProduct` (drops the ID).
    #[must_use]
    pub fn to_new_product(&self) -> NewProduct {
        NewProduct {
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price,
            thumbnail: self.thumbnail.clone(),
            code: self.code.clone(),
            stock: self.stock,
        }
    }
}

/// Compute the ID for the next product appended to `products`.
///
/// This is one more than the largest existing ID, or `1` for an empty
/// catalog. Returns `None` when the ID space is exhausted.
pub fn next_product_id(products: &[Product]) -> Option<u64> {
    products
        .iter()
        .map(|p| p.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
}
