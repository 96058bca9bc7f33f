//! Custom Axum extractors
//!
//! Both reject with `ApiError` so malformed input gets the same
//! `{success: false, message}` body as every other failure.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// Extract and validate an integer id from path
pub struct ValidId(pub i64);

impl ValidId {
    fn parse(raw: &str) -> Result<Self, ValidationError> {
        raw.parse::<i64>().map(Self).map_err(|_| ValidationError::InvalidFormat {
            field: "id",
            reason: "must be an integer",
        })
    }
}

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Required { field: "id" }))?;

        Ok(Self::parse(&id)?)
    }
}

/// Extract the owning user id from path
pub struct UserId(pub String);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(user_id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "user_id",
                    reason: "must be valid UTF-8",
                })
            })?;

        Ok(Self(user_id))
    }
}

/// JSON body whose rejections are reported as validation errors
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            ApiError::Validation(ValidationError::MalformedBody {
                reason: rejection.body_text(),
            })
        })?;

        Ok(Self(value))
    }
}
