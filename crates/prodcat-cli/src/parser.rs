//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::Parser;
use prodcat_axum::bootstrap::DEFAULT_CATALOG_PATH;

use crate::commands::Commands;

/// Command-line interface for the product catalog.
#[derive(Parser)]
#[command(name = "prodcat")]
#[command(about = "Serve and manage a JSON product catalog")]
#[command(version)]
pub struct Cli {
    /// Path to the catalog JSON file
    #[arg(
        long = "catalog",
        global = true,
        env = "PRODCAT_CATALOG",
        default_value = DEFAULT_CATALOG_PATH
    )]
    pub catalog: PathBuf,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
