//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections, so every client error shares the JSON error body.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;

/// `{id}` path segment parsed as a UUID.
///
/// A malformed id is a 400 `validation_error`.
#[derive(Debug, Clone, Copy)]
pub struct BookId(pub Uuid);

impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<Uuid>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::bad_request("Invalid book id", json!({ "reason": e.body_text() }))
            })?;

        Ok(Self(id))
    }
}

/// JSON body that is deserialized and then validated.
///
/// Malformed JSON, a missing field or a wrong content type is a 400
/// `validation_error`, the same as a failed presence check.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            AppError::bad_request("Invalid request body", json!({ "reason": e.body_text() }))
        })?;

        value.validate()?;

        Ok(Self(value))
    }
}
