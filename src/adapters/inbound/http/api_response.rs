//! Response envelope and error rendering for the HTTP surface

use crate::shared::BootcampError;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Request header carrying the caller's correlation id
pub const MESSAGE_ID_HEADER: &str = "x-message-id";

/// Underscore spelling accepted from older callers
const LEGACY_MESSAGE_ID_HEADER: &str = "x_message_id";

/// Returns the caller's message id, or a fresh UUID v4 when none was sent
pub fn message_id(headers: &HeaderMap) -> String {
    [MESSAGE_ID_HEADER, LEGACY_MESSAGE_ID_HEADER]
        .iter()
        .filter_map(|name| headers.get(*name))
        .filter_map(|value| value.to_str().ok())
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDto {
    pub code: String,
    pub message: String,
    pub param: Option<String>,
}

/// Envelope wrapping every single-entity response and every error
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub code: String,
    pub message: String,
    pub identifier: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDto>>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(status: StatusCode, identifier: String, data: T) -> Self {
        Self {
            code: status.as_u16().to_string(),
            message: reason(status),
            identifier,
            date: now_iso(),
            data: Some(data),
            errors: None,
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(status: StatusCode, identifier: String, errors: Vec<ErrorDto>) -> Self {
        Self {
            code: status.as_u16().to_string(),
            message: reason(status),
            identifier,
            date: now_iso(),
            data: None,
            errors: Some(errors),
        }
    }
}

fn reason(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Unknown").to_string()
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Error returned by handlers, rendered as a failure envelope
#[derive(Debug)]
pub enum ApiError {
    Bootcamp {
        identifier: String,
        error: BootcampError,
    },
    NotFound {
        identifier: String,
    },
}

impl ApiError {
    pub fn new(identifier: &str, error: BootcampError) -> Self {
        ApiError::Bootcamp {
            identifier: identifier.to_string(),
            error,
        }
    }

    pub fn not_found(identifier: &str) -> Self {
        ApiError::NotFound {
            identifier: identifier.to_string(),
        }
    }
}

/// HTTP status for a core failure
pub fn status_for(error: &BootcampError) -> StatusCode {
    if error.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Bootcamp { identifier, error } => {
                let status = status_for(&error);
                if status.is_server_error() {
                    tracing::error!(%identifier, code = error.code(), "request failed: {:?}", error);
                } else {
                    tracing::warn!(%identifier, code = error.code(), "request rejected: {}", error);
                }
                let dto = ErrorDto {
                    code: error.code().to_string(),
                    message: error.to_string(),
                    param: error.param().map(str::to_string),
                };
                (status, ApiResponse::failure(status, identifier, vec![dto]))
            }
            ApiError::NotFound { identifier } => {
                let dto = ErrorDto {
                    code: "404".to_string(),
                    message: "Bootcamp not found".to_string(),
                    param: Some("id".to_string()),
                };
                let status = StatusCode::NOT_FOUND;
                (status, ApiResponse::failure(status, identifier, vec![dto]))
            }
        };
        (status, Json(body)).into_response()
    }
}
