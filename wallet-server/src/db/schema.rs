//! Table bootstrap run on every startup
//!
//! Every statement is `IF NOT EXISTS`, so running it against an
//! already initialized database is a no-op.

use sqlx::PgPool;

const CREATE_TRANSACTIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS transactions (
        id SERIAL PRIMARY KEY,
        user_id VARCHAR(255) NOT NULL,
        title VARCHAR(255) NOT NULL,
        amount DECIMAL(10, 2) NOT NULL,
        category VARCHAR(255) NOT NULL,
        created_at DATE NOT NULL DEFAULT CURRENT_DATE
    )
"#;

const CREATE_USER_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_transactions_user_id
        ON transactions (user_id)
"#;

/// Ensure the `transactions` table and its user index exist.
///
/// Callers treat any error as fatal: the server must not start
/// against a schema in an unknown state.
pub async fn init(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Initializing transactions schema...");

    sqlx::query(CREATE_TRANSACTIONS).execute(pool).await?;
    sqlx::query(CREATE_USER_INDEX).execute(pool).await?;

    tracing::info!("Transactions schema ready");
    Ok(())
}
