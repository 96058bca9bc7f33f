//! Database layer - connection pool, schema bootstrap and repositories
//!
//! - Connection pool shared through application state - no global handle
//! - Schema created on startup with `IF NOT EXISTS` - no migrations framework
//! - One statement per operation, no multi-statement transactions

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
