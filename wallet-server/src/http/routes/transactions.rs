//! Transaction endpoints
//!
//! `GET` and `DELETE` share the `/api/transactions/{..}` segment: it is a
//! user id for listing and a row id for deletion.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{UserId, ValidId, ValidJson};
use crate::models::{NewTransaction, Summary, Transaction, ValidationError};
use crate::state::AppState;

/// Create transaction request
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub amount: Option<Decimal>,
    pub category: Option<String>,
}

impl TryFrom<CreateTransactionRequest> for NewTransaction {
    type Error = ValidationError;

    fn try_from(req: CreateTransactionRequest) -> Result<Self, Self::Error> {
        NewTransaction::new(req.user_id, req.title, req.amount, req.category)
    }
}

/// Successful response carrying a payload
#[derive(Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    fn new(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// Successful response carrying only a message
#[derive(Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: &'static str,
}

/// POST /api/transactions - create a transaction
async fn create_transaction(
    State(state): State<AppState>,
    ValidJson(req): ValidJson<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<DataResponse<Transaction>>), ApiError> {
    let txn = NewTransaction::try_from(req)?;
    let row = state.transactions().create(txn).await?;

    tracing::info!(id = row.id, user_id = %row.user_id, "transaction created");
    Ok((StatusCode::CREATED, DataResponse::new(row)))
}

/// GET /api/transactions/{user_id} - list a user's transactions, newest first
async fn list_transactions(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<DataResponse<Vec<Transaction>>>, ApiError> {
    let rows = state.transactions().list_by_user(&user_id).await?;
    Ok(DataResponse::new(rows))
}

/// DELETE /api/transactions/{id} - delete a single transaction
async fn delete_transaction(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = state
        .transactions()
        .delete(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "Transaction",
            id: id.to_string(),
        })?;

    tracing::info!(id = deleted.id, user_id = %deleted.user_id, "transaction deleted");
    Ok(Json(MessageResponse {
        success: true,
        message: "Transaction deleted successfully",
    }))
}

/// GET /api/transactions/summary/{user_id} - balance, income and expense
async fn transaction_summary(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<DataResponse<Summary>>, ApiError> {
    let summary = state.transactions().summary(&user_id).await?;
    Ok(DataResponse::new(summary))
}

/// Transaction routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/transactions", post(create_transaction))
        .route("/api/transactions/summary/{user_id}", get(transaction_summary))
        .route(
            "/api/transactions/{user_id}",
            get(list_transactions).delete(delete_transaction),
        )
}
