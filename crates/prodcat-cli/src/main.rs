//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, installs logging, then dispatches to a
//! handler with a bootstrapped `CliContext`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use prodcat_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so `--json` output on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = bootstrap(&CliConfig {
        catalog_path: cli.catalog,
    })?;

    match cli.command {
        Commands::Serve { port } => handlers::serve::execute(&ctx, port).await,
        Commands::List { limit, json } => handlers::list::execute(&ctx, limit, json).await,
        Commands::Get { id, json } => handlers::get::execute(&ctx, id, json).await,
        Commands::Add { fields } => handlers::add::execute(&ctx, fields).await,
        Commands::Update { id, fields } => handlers::update::execute(&ctx, id, fields).await,
        Commands::Remove { id } => handlers::remove::execute(&ctx, id).await,
    }
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads PRODCAT_* defaults
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
