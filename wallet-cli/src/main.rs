//! wallet CLI - runs and bootstraps the transaction API
//!
//! - `serve`: initialize the schema, then serve HTTP until shutdown
//! - `init-db`: initialize the schema and exit
//!
//! Settings come from flags or the environment; a `.env` file in the
//! working directory is loaded first when present.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "wallet",
    author,
    version,
    about = "Transaction tracking API backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the transactions table if it does not exist, then exit
    InitDb(commands::init_db::InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::InitDb(args) => commands::init_db::run_init_db(args).await,
    }
}
