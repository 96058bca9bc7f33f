//! Transaction repository
//!
//! Every operation is a single parameterized statement, except the
//! summary which issues three independent aggregates. Those three are
//! not wrapped in a database transaction, so a concurrent write can
//! land between them.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::{NewTransaction, Summary, Transaction};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Storage operations behind the transaction endpoints.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Insert a row, returning it with the generated `id` and `created_at`.
    async fn create(&self, txn: NewTransaction) -> Result<Transaction, DbError>;

    /// All rows for a user, most recent `created_at` first.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Transaction>, DbError>;

    /// Delete by id, returning the removed row if there was one.
    async fn delete(&self, id: i64) -> Result<Option<Transaction>, DbError>;

    /// Balance, income and expense for a user, each zero when nothing matches.
    async fn summary(&self, user_id: &str) -> Result<Summary, DbError>;
}

/// PostgreSQL-backed transaction repository
#[derive(Clone)]
pub struct PgTransactionRepo {
    pool: PgPool,
}

impl PgTransactionRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn sum(&self, query: &'static str, user_id: &str) -> Result<Decimal, DbError> {
        let (total,): (Decimal,) = sqlx::query_as(query)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}

#[async_trait]
impl TransactionStore for PgTransactionRepo {
    async fn create(&self, txn: NewTransaction) -> Result<Transaction, DbError> {
        let row = sqlx::query_as::<_, Transaction>(
            r#"
            INSERT INTO transactions (user_id, title, amount, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, title, amount, category, created_at
            "#,
        )
        .bind(&txn.user_id)
        .bind(&txn.title)
        .bind(txn.amount)
        .bind(&txn.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Transaction>, DbError> {
        let rows = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, user_id, title, amount, category, created_at
            FROM transactions
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn delete(&self, id: i64) -> Result<Option<Transaction>, DbError> {
        let row = sqlx::query_as::<_, Transaction>(
            r#"
            DELETE FROM transactions
            WHERE id = $1
            RETURNING id, user_id, title, amount, category, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn summary(&self, user_id: &str) -> Result<Summary, DbError> {
        let balance = self
            .sum(
                "SELECT COALESCE(SUM(amount), 0) FROM transactions WHERE user_id = $1",
                user_id,
            )
            .await?;
        let income = self
            .sum(
                "SELECT COALESCE(SUM(amount), 0) FROM transactions WHERE user_id = $1 AND amount > 0",
                user_id,
            )
            .await?;
        let expense = self
            .sum(
                "SELECT COALESCE(SUM(amount), 0) FROM transactions WHERE user_id = $1 AND amount < 0",
                user_id,
            )
            .await?;

        Ok(Summary {
            balance,
            income,
            expense,
        })
    }
}
