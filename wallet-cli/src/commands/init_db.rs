//! Schema bootstrap without starting the server

use anyhow::Result;
use clap::Parser;

use super::DatabaseArgs;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create the transactions table if it is missing, then exit
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let pool = args.db.connect().await?;
    pool.close().await;

    println!("transactions table ready");
    Ok(())
}
