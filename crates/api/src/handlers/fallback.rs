//! Handlers for requests no route accepts.
//!
//! Both read [`OriginalUri`]: inside a nested router the plain `Uri` has the
//! prefix stripped.

use axum::extract::OriginalUri;
use axum::http::{Method, StatusCode};

use crate::error::AppError;

/// No route matches the path.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::rejected(
        StatusCode::NOT_FOUND,
        format!("No route for {}", uri.path()),
    )
}

/// The path exists but not for this method.
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::rejected(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("{method} is not supported on {}", uri.path()),
    )
}
