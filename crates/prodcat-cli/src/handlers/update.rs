//! Update command handler.
//!
//! Replaces every field of a product. There is no partial update.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::commands::ProductFields;
use crate::error::CliError;
use crate::presentation::display_product;

/// Execute the update command.
pub async fn execute(ctx: &CliContext, id: u64, fields: ProductFields) -> Result<()> {
    let updated = ctx
        .products()
        .update(id, fields.into())
        .await
        .map_err(CliError::from)?;

    display_product(Some("Product updated:"), &updated);
    Ok(())
}
