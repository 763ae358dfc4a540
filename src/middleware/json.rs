use axum::extract::FromRequest;

use crate::error::ApiError;

/// `axum::Json` whose rejections render through `ApiError`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
