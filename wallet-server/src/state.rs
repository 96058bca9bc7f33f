//! Application state shared across handlers

use sqlx::PgPool;
use std::sync::Arc;

use crate::db::{PgTransactionRepo, TransactionStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    transactions: Arc<dyn TransactionStore>,
}

impl AppState {
    pub fn new(transactions: Arc<dyn TransactionStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { transactions }),
        }
    }

    /// State backed by the PostgreSQL repository.
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(PgTransactionRepo::new(pool)))
    }

    pub fn transactions(&self) -> &dyn TransactionStore {
        self.inner.transactions.as_ref()
    }
}
