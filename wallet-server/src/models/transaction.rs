//! Transaction records and the validated insert payload

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{required, ValidationError};

/// A persisted transaction row.
///
/// `amount` follows the sign convention used by the summary:
/// positive is income, negative is expense.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i32,
    pub user_id: String,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub category: String,
    pub created_at: NaiveDate,
}

/// Insert payload. Construction guarantees every column the
/// database does not fill itself is present.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub user_id: String,
    pub title: String,
    pub amount: Decimal,
    pub category: String,
}

impl NewTransaction {
    /// Validate raw request fields.
    ///
    /// String fields must be present and non-empty. `amount` must be
    /// present; zero is a valid amount.
    pub fn new(
        user_id: Option<String>,
        title: Option<String>,
        amount: Option<Decimal>,
        category: Option<String>,
    ) -> Result<Self, ValidationError> {
        let user_id = required("user_id", user_id)?;
        let title = required("title", title)?;
        let amount = amount.ok_or(ValidationError::Required { field: "amount" })?;
        let category = required("category", category)?;

        Ok(Self {
            user_id,
            title,
            amount,
            category,
        })
    }
}

/// Per-user aggregate over `amount`.
///
/// `expense` sums only negative amounts, so it is zero or negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub expense: Decimal,
}
