//! Remove command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the remove command.
pub async fn execute(ctx: &CliContext, id: u64) -> Result<()> {
    let removed = ctx.products().remove(id).await.map_err(CliError::from)?;

    println!("Removed product {}: {}", removed.id, removed.title);
    Ok(())
}
