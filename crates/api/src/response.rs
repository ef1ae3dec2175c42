//! Standard response envelopes and the functions that write them.
//!
//! Every JSON response body has the shape
//!
//! ```text
//! { "success": true,  "data": ... }                                   // 2xx
//! { "success": false, "error": { "code": "Bad Request", "message": ... } }
//! ```
//!
//! `data` and `error` are omitted when absent. Handlers normally return a
//! [`Reply`] or an [`AppError`](crate::error::AppError) and let
//! `IntoResponse` pick the writer.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// The standard response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

/// Error detail carried by a failure envelope.
///
/// `code` is the status reason phrase (e.g. `"Not Found"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
}

impl ApiResponse<()> {
    pub fn failure(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorInfo {
                code: status_text(status).to_string(),
                message: message.into(),
            }),
        }
    }
}

/// A successful handler outcome, written with the matching status code.
#[derive(Debug)]
pub enum Reply<T> {
    /// 200 with `data`.
    Ok(T),
    /// 201 with `data`.
    Created(T),
    /// 204 with an empty body.
    NoContent,
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        match self {
            Reply::Ok(data) => write_success(data),
            Reply::Created(data) => write_created(data),
            Reply::NoContent => write_no_content(),
        }
    }
}

/// Write `data` inside the envelope with the given status.
///
/// `success` is true for any 2xx status. `None` omits the `data` key.
pub fn write_json<T: Serialize>(status: StatusCode, data: Option<T>) -> Response {
    let body = ApiResponse {
        success: status.is_success(),
        data,
        error: None,
    };
    encode(status, &body)
}

/// 200 OK with `data`.
pub fn write_success<T: Serialize>(data: T) -> Response {
    write_json(StatusCode::OK, Some(data))
}

/// 201 Created with `data`.
pub fn write_created<T: Serialize>(data: T) -> Response {
    write_json(StatusCode::CREATED, Some(data))
}

/// 204 No Content, no body.
pub fn write_no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Failure envelope using the error's own status.
pub fn write_error(err: &AppError) -> Response {
    let status = err.status();
    if status.is_server_error() {
        tracing::error!(error = %err, "Request failed");
    }
    encode(status, &ApiResponse::failure(status, err.public_message()))
}

fn encode<T: Serialize>(status: StatusCode, body: &ApiResponse<T>) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (
            status,
            [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
            bytes,
        )
            .into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to serialize response envelope");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(CONTENT_TYPE, HeaderValue::from_static("text/plain; charset=utf-8"))],
                "Internal Server Error",
            )
                .into_response()
        }
    }
}

/// Reason phrase for a status, e.g. `"Bad Request"` for 400.
pub fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Status")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_error() {
        let body = ApiResponse {
            success: true,
            data: Some(vec![1, 2]),
            error: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"success": true, "data": [1, 2]})
        );
    }

    #[test]
    fn failure_envelope_omits_data() {
        let body = ApiResponse::failure(StatusCode::BAD_REQUEST, "name is required");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "success": false,
                "error": {"code": "Bad Request", "message": "name is required"}
            })
        );
    }

    #[test]
    fn status_text_uses_reason_phrase() {
        assert_eq!(status_text(StatusCode::NOT_FOUND), "Not Found");
        assert_eq!(status_text(StatusCode::CONFLICT), "Conflict");
        assert_eq!(
            status_text(StatusCode::from_u16(599).unwrap()),
            "Unknown Status"
        );
    }
}
