//! In-memory stores for router tests

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use super::transactions::{DbError, TransactionStore};
use crate::models::{NewTransaction, Summary, Transaction};

/// Mirrors the PostgreSQL repository: sequential ids, amounts rounded
/// to the column's two places, `created_at` defaulting to today,
/// newest-first listing.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i32,
    rows: Vec<Transaction>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert with an explicit date, for ordering tests.
    pub fn insert_dated(&self, txn: NewTransaction, created_at: NaiveDate) -> Transaction {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        inner.next_id += 1;
        let row = Transaction {
            id: inner.next_id,
            user_id: txn.user_id,
            title: txn.title,
            // NUMERIC rounds half away from zero
            amount: txn
                .amount
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            category: txn.category,
            created_at,
        };
        inner.rows.push(row.clone());
        row
    }

    pub fn row_count(&self) -> usize {
        self.inner.lock().expect("store lock poisoned").rows.len()
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn create(&self, txn: NewTransaction) -> Result<Transaction, DbError> {
        Ok(self.insert_dated(txn, Utc::now().date_naive()))
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Transaction>, DbError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let mut rows: Vec<Transaction> = inner
            .rows
            .iter()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn delete(&self, id: i64) -> Result<Option<Transaction>, DbError> {
        let mut inner = self.inner.lock().expect("store lock poisoned");
        let pos = inner.rows.iter().position(|t| i64::from(t.id) == id);
        Ok(pos.map(|i| inner.rows.remove(i)))
    }

    async fn summary(&self, user_id: &str) -> Result<Summary, DbError> {
        let inner = self.inner.lock().expect("store lock poisoned");
        let amounts = inner
            .rows
            .iter()
            .filter(|t| t.user_id == user_id)
            .map(|t| t.amount);

        let mut summary = Summary::default();
        for amount in amounts {
            summary.balance += amount;
            if amount > Decimal::ZERO {
                summary.income += amount;
            } else if amount < Decimal::ZERO {
                summary.expense += amount;
            }
        }
        Ok(summary)
    }
}

/// Every call fails as if the database were unreachable.
pub struct FailingStore;

impl FailingStore {
    fn error() -> DbError {
        DbError::Sqlx(sqlx::Error::Protocol(
            "relation \"transactions\" does not exist".into(),
        ))
    }
}

#[async_trait]
impl TransactionStore for FailingStore {
    async fn create(&self, _txn: NewTransaction) -> Result<Transaction, DbError> {
        Err(Self::error())
    }

    async fn list_by_user(&self, _user_id: &str) -> Result<Vec<Transaction>, DbError> {
        Err(Self::error())
    }

    async fn delete(&self, _id: i64) -> Result<Option<Transaction>, DbError> {
        Err(Self::error())
    }

    async fn summary(&self, _user_id: &str) -> Result<Summary, DbError> {
        Err(Self::error())
    }
}
