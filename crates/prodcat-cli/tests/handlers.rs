//! Integration tests for CLI command handlers.
//!
//! Handlers run against a real catalog file in a temporary directory.

use prodcat_cli::{CliConfig, CliError, ProductFields, bootstrap, handlers};
use prodcat_core::Product;
use tempfile::TempDir;

fn fields(title: &str) -> ProductFields {
    ProductFields {
        title: title.to_string(),
        description: format!("Description for {title}"),
        price: 19.99,
        thumbnail: "product.jpg".to_string(),
        code: "P1".to_string(),
        stock: 100,
    }
}

fn read_catalog(dir: &TempDir) -> Vec<Product> {
    let raw = std::fs::read_to_string(dir.path().join("products.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn context(dir: &TempDir) -> prodcat_cli::CliContext {
    bootstrap(&CliConfig {
        catalog_path: dir.path().join("products.json"),
    })
    .unwrap()
}

#[tokio::test]
async fn test_add_update_remove_round_trip() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);

    handlers::add::execute(&ctx, fields("Product 1")).await.unwrap();
    handlers::add::execute(&ctx, fields("Product 2")).await.unwrap();
    let catalog = read_catalog(&dir);
    assert_eq!(catalog.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);

    handlers::update::execute(&ctx, 1, fields("Updated Product 1"))
        .await
        .unwrap();
    assert_eq!(read_catalog(&dir)[0].title, "Updated Product 1");
    assert_eq!(read_catalog(&dir)[0].id, 1);

    handlers::remove::execute(&ctx, 1).await.unwrap();
    let catalog = read_catalog(&dir);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].id, 2);

    handlers::list::execute(&ctx, Some(1), false).await.unwrap();
    handlers::get::execute(&ctx, 2, true).await.unwrap();
}

#[tokio::test]
async fn test_missing_product_maps_to_not_found_exit_code() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);

    for err in [
        handlers::get::execute(&ctx, 9, false).await.unwrap_err(),
        handlers::update::execute(&ctx, 9, fields("Ghost")).await.unwrap_err(),
        handlers::remove::execute(&ctx, 9).await.unwrap_err(),
    ] {
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert!(matches!(cli_err, CliError::NotFound(_)));
        assert_eq!(cli_err.exit_code(), 1);
    }
    assert!(!dir.path().join("products.json").exists());
}

#[tokio::test]
async fn test_list_on_empty_catalog_succeeds() {
    let dir = TempDir::new().unwrap();
    let ctx = context(&dir);

    handlers::list::execute(&ctx, None, false).await.unwrap();
    handlers::list::execute(&ctx, None, true).await.unwrap();
}

#[test]
fn test_bootstrap_resolves_relative_path() {
    let ctx = bootstrap(&CliConfig {
        catalog_path: "products.json".into(),
    })
    .unwrap();
    assert!(ctx.catalog_path.is_absolute());
    assert!(ctx.catalog_path.ends_with("products.json"));
}
