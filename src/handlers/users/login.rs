// handlers/users/login.rs - POST /api/login handler

use axum::extract::State;
use serde::Deserialize;

use crate::auth;
use crate::database::models::User;
use crate::error::{ApiError, ResultExt};
use crate::handlers::non_blank;
use crate::middleware::{ApiJson, ApiResponse, ApiResult};
use crate::state::AppState;

const LOGIN_FAILED: &str = "Login failed";
const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// POST /api/login - check credentials
///
/// Responds 200 with the stored user (no password) under `user`.
/// Unknown username and wrong password both give the same 401.
pub async fn login_post(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> ApiResult<User> {
    let (Some(username), Some(password)) = (non_blank(payload.username), non_blank(payload.password)) else {
        return Err(ApiError::validation_error("Username and password are required"));
    };

    let Some(user) = state
        .users
        .find_by_username(&username)
        .await
        .or_internal(LOGIN_FAILED)?
    else {
        tracing::info!("Login rejected for unknown user {}", username);
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    };

    let matches = auth::verify_password(password, user.password.clone())
        .await
        .or_internal(LOGIN_FAILED)?;
    if !matches {
        tracing::info!(user_id = %user.id, "Login rejected: wrong password");
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    }

    tracing::info!(user_id = %user.id, "User {} logged in", user.username);

    Ok(ApiResponse::success(user).with_message("Login successful").as_user())
}
