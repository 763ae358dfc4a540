use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Which envelope key carries the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKey {
    Data,
    User,
}

impl PayloadKey {
    fn as_str(&self) -> &'static str {
        match self {
            PayloadKey::Data => "data",
            PayloadKey::User => "user",
        }
    }
}

/// Successful API response: `{ success: true, message?, data? | user? }`
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: Option<T>,
    pub message: Option<String>,
    pub key: PayloadKey,
    pub status_code: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK with the payload under `data`
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            message: None,
            key: PayloadKey::Data,
            status_code: StatusCode::OK,
        }
    }

    /// 201 Created with the payload under `data`
    pub fn created(data: T) -> Self {
        Self::success(data).with_status(StatusCode::CREATED)
    }

    pub fn with_status(mut self, status_code: StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Move the payload under `user`
    pub fn as_user(mut self) -> Self {
        self.key = PayloadKey::User;
        self
    }
}

impl ApiResponse<()> {
    /// 200 OK carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            data: None,
            message: Some(message.into()),
            key: PayloadKey::Data,
            status_code: StatusCode::OK,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let mut envelope = Map::new();
        envelope.insert("success".to_string(), Value::Bool(true));

        if let Some(message) = self.message {
            envelope.insert("message".to_string(), Value::String(message));
        }

        if let Some(data) = &self.data {
            match serde_json::to_value(data) {
                Ok(value) => {
                    envelope.insert(self.key.as_str().to_string(), value);
                }
                Err(e) => {
                    tracing::error!("Failed to serialize response data: {}", e);
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(json!({
                            "success": false,
                            "message": "Failed to serialize response data",
                            "error": e.to_string()
                        })),
                    )
                        .into_response();
                }
            }
        }

        (self.status_code, Json(Value::Object(envelope))).into_response()
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
