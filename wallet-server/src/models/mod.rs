//! Domain models with validation at construction
//!
//! Request input is validated when building these types.
//! Invalid input returns ValidationError, not panic.

pub mod transaction;
pub mod validation;

pub use transaction::{NewTransaction, Summary, Transaction};
pub use validation::ValidationError;
