// HTTP API Error Types
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::auth::PasswordError;
use crate::database::DatabaseError;

/// HTTP API error with status code and client-facing message
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    ValidationError(String),
    Conflict(String),
    InvalidJson { message: String, detail: String },

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error; `detail` is the underlying error text
    InternalServerError { message: String, detail: String },
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            // duplicates are reported as bad input, like the other 400s
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidJson { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::ValidationError(msg) => msg,
            ApiError::Conflict(msg) => msg,
            ApiError::InvalidJson { message, .. } => message,
            ApiError::Unauthorized(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::InternalServerError { message, .. } => message,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::InvalidJson { detail, .. } => Some(detail),
            ApiError::InternalServerError { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Response body: `{ success: false, message, error? }`
    pub fn to_json(&self) -> Value {
        let mut body = json!({
            "success": false,
            "message": self.message(),
        });

        if let Some(detail) = self.detail() {
            body["error"] = json!(detail);
        }

        body
    }
}

impl ApiError {
    pub fn validation_error(message: impl Into<String>) -> Self {
        ApiError::ValidationError(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    /// Server-side failure. Logs the cause and keeps its text for the response body.
    pub fn internal(message: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        let message = message.into();
        let detail = cause.to_string();
        tracing::error!("{}: {}", message, detail);
        ApiError::InternalServerError { message, detail }
    }
}

/// Attach the operation's failure message to a lower-level error
pub trait ResultExt<T> {
    fn or_internal(self, message: &str) -> Result<T, ApiError>;
}

impl<T> ResultExt<T> for Result<T, DatabaseError> {
    fn or_internal(self, message: &str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::internal(message, e))
    }
}

impl<T> ResultExt<T> for Result<T, PasswordError> {
    fn or_internal(self, message: &str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::internal(message, e))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidJson {
            message: "Invalid JSON body".to_string(),
            detail: rejection.body_text(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.detail() {
            Some(detail) => write!(f, "{}: {}", self.message(), detail),
            None => write!(f, "{}", self.message()),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
