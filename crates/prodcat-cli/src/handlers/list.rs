//! List command handler.
//!
//! Displays catalog products in insertion order as a table or JSON.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{print_separator, truncate_string};

/// Execute the list command.
///
/// # Arguments
///
/// * `ctx` - The CLI context providing access to the product service
/// * `limit` - Optional number of leading products to show
/// * `json` - Print the products as a JSON array instead of a table
pub async fn execute(ctx: &CliContext, limit: Option<i64>, json: bool) -> Result<()> {
    let products = ctx.products().list(limit).await.map_err(CliError::from)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    if products.is_empty() {
        println!("No products found in {}.", ctx.catalog_path.display());
        println!("Use 'prodcat add' to add your first product.");
        return Ok(());
    }

    println!("Found {} product(s):\n", products.len());
    println!(
        "{:<5} {:<30} {:<12} {:>10} {:>8}",
        "ID", "Title", "Code", "Price", "Stock"
    );
    print_separator(69);

    for product in products {
        println!(
            "{:<5} {:<30} {:<12} {:>10.2} {:>8}",
            product.id,
            truncate_string(&product.title, 29),
            truncate_string(&product.code, 11),
            product.price,
            product.stock,
        );
    }

    Ok(())
}
