//! Get command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_product;

/// Execute the get command.
///
/// A missing product is reported as `CliError::NotFound`.
pub async fn execute(ctx: &CliContext, id: u64, json: bool) -> Result<()> {
    let product = ctx.products().find(id).await.map_err(CliError::from)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&product)?);
    } else {
        display_product(None, &product);
    }
    Ok(())
}
