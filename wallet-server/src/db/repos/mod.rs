//! Repository implementations for database access

pub mod transactions;

#[cfg(test)]
pub mod memory;

pub use transactions::{DbError, PgTransactionRepo, TransactionStore};
