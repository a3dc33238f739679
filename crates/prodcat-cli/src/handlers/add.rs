//! Add command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::ProductFields;
use crate::error::CliError;
use crate::presentation::display_product;

/// Execute the add command. The store assigns the ID.
pub async fn execute(ctx: &CliContext, fields: ProductFields) -> Result<()> {
    let created = ctx
        .products()
        .add(fields.into())
        .await
        .map_err(CliError::from)?;

    display_product(Some("Product added:"), &created);
    Ok(())
}
