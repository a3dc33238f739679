//! Command handlers that delegate to `ProductService`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Convert CLI arguments into domain input
//!   2. Call `ProductService`
//!   3. Format output for the terminal
//!
//! Handlers should NOT touch the catalog file directly.

pub mod add;
pub mod get;
pub mod list;
pub mod remove;
pub mod serve;
pub mod update;
