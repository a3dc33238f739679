//! Product summary display for CLI output.

use prodcat_core::Product;

/// Print every field of a product, one per line.
pub fn display_product(title: Option<&str>, product: &Product) {
    if let Some(title) = title {
        println!("{title}");
    }
    println!("  ID:          {}", product.id);
    println!("  Title:       {}", product.title);
    println!("  Description: {}", product.description);
    println!("  Price:       {:.2}", product.price);
    println!("  Code:        {}", product.code);
    println!("  Stock:       {}", product.stock);
    println!("  Thumbnail:   {}", product.thumbnail);
}
