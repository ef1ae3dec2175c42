//! Extractors whose rejections are written with the failure envelope.
//!
//! [`ValidatedJson`] decodes and validates a JSON body. [`ApiPath`] and
//! [`ApiQuery`] wrap axum's `Path` and `Query` so a malformed id or query
//! string is reported the same way as any other client error.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use httpkit_core::validation::{validate, Validatable};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor that rejects payloads failing their declared
/// constraints.
///
/// Rejections are [`AppError`]s, so they are written with the standard
/// failure envelope: 400 for bad JSON and failed constraints, 413 for a body
/// over the limit. Payload types should carry
/// `#[serde(deny_unknown_fields)]` to reject unexpected keys.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateProject>) -> AppResult<Reply<Project>>
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validatable,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Keep the rejection's own status: an oversized body is a 413.
        let body = Bytes::from_request(req, state).await.map_err(|e| {
            AppError::rejected(
                e.status(),
                format!("Failed to read request body: {}", e.body_text()),
            )
        })?;

        let value: T = decode_json(&body)?;

        if let Err(violation) = validate(&value) {
            tracing::debug!(reason = %violation, "Request payload failed validation");
            return Err(violation.into());
        }

        Ok(Self(value))
    }
}

/// Path parameters, rejected with the failure envelope.
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(e) => Err(AppError::rejected(e.status(), e.body_text())),
        }
    }
}

/// Query string parameters, rejected with the failure envelope.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(e) => Err(AppError::rejected(e.status(), e.body_text())),
        }
    }
}

/// Decode a JSON request body.
///
/// An empty body and malformed JSON are both 400s with a message naming the
/// problem.
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    if body.is_empty() {
        return Err(AppError::BadRequest("Request body is empty".into()));
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON format: {e}")))
}
