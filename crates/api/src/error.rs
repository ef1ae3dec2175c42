use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use httpkit_core::error::CoreError;
use httpkit_core::validation::Violation;

use crate::response::write_error;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the standard failure envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `httpkit_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A request the framework turned away before any handler logic ran:
    /// extractor rejections, unknown routes, unsupported methods.
    #[error("Rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        AppError::Rejected {
            status,
            message: message.into(),
        }
    }

    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                CoreError::Validation(_) => StatusCode::BAD_REQUEST,
                CoreError::Conflict(_) => StatusCode::CONFLICT,
            },
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Rejected { status, .. } => *status,
        }
    }

    /// Message safe to show to the client. Server-side rejections are
    /// sanitized; the details only go to the log.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => format!("{entity} with id {id} not found"),
                CoreError::Validation(msg) | CoreError::Conflict(msg) => msg.clone(),
            },
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Rejected { status, .. } if status.is_server_error() => {
                INTERNAL_MESSAGE.to_string()
            }
            AppError::Rejected { message, .. } => message.clone(),
        }
    }
}

impl From<Violation> for AppError {
    fn from(violation: Violation) -> Self {
        AppError::Core(CoreError::from(violation))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        write_error(&self)
    }
}
