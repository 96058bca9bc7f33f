//! Subcommand implementations

pub mod init_db;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;
use sqlx::PgPool;

use wallet_server::db::{create_pool_with_options, pool::DEFAULT_MAX_CONNECTIONS, schema};

/// Database connection options shared by every subcommand
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Maximum number of pooled connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Open the pool and make sure the schema exists.
    ///
    /// Any error here is fatal for the caller: nothing is served
    /// against a database whose schema could not be confirmed.
    pub async fn connect(&self) -> Result<PgPool> {
        let pool = create_pool_with_options(&self.database_url, self.max_connections)
            .await
            .context("Failed to create database pool")?;

        if let Err(err) = schema::init(&pool).await {
            tracing::error!("Error initializing database: {}", err);
            pool.close().await;
            return Err(err).context("Failed to initialize database schema");
        }

        Ok(pool)
    }
}
