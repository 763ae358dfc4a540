// handlers/users/register.rs - POST /api/register handler

use axum::extract::State;
use serde::Deserialize;

use crate::auth;
use crate::database::models::User;
use crate::database::{DatabaseError, NewUser};
use crate::error::{ApiError, ResultExt};
use crate::handlers::{non_blank, within_length};
use crate::middleware::{ApiJson, ApiResponse, ApiResult};
use crate::state::AppState;

use super::validate_email_format;

const REGISTRATION_FAILED: &str = "Registration failed";
const ALREADY_EXISTS: &str = "Username or email already exists";

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /api/register - create a user account
///
/// Expected Input:
/// ```json
/// { "username": "budi", "email": "budi@example.com", "password": "rahasia123" }
/// ```
///
/// Responds 201 with the new user (no password) under `user`.
/// 400 when a field is missing or too long, the email is malformed, or
/// the username/email is already registered.
pub async fn register_post(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> ApiResult<User> {
    let (Some(username), Some(email), Some(password)) = (
        non_blank(payload.username),
        non_blank(payload.email),
        non_blank(payload.password),
    ) else {
        return Err(ApiError::validation_error("Username, email and password are required"));
    };

    let username = within_length("username", username)?;
    let email = within_length("email", email)?;
    validate_email_format(&email).map_err(ApiError::validation_error)?;

    if password.len() > auth::MAX_PASSWORD_BYTES {
        return Err(ApiError::validation_error(format!(
            "Password must be at most {} bytes",
            auth::MAX_PASSWORD_BYTES
        )));
    }

    let existing = state
        .users
        .find_by_username_or_email(&username, &email)
        .await
        .or_internal(REGISTRATION_FAILED)?;
    if existing.is_some() {
        return Err(ApiError::conflict(ALREADY_EXISTS));
    }

    let password = auth::hash_password(password).await.or_internal(REGISTRATION_FAILED)?;

    // The unique constraints still catch a concurrent registration
    let user = match state.users.insert(NewUser { username, email, password }).await {
        Ok(user) => user,
        Err(DatabaseError::Duplicate(constraint)) => {
            tracing::debug!("Registration lost race on {}", constraint);
            return Err(ApiError::conflict(ALREADY_EXISTS));
        }
        Err(e) => return Err(ApiError::internal(REGISTRATION_FAILED, e)),
    };

    tracing::info!(user_id = %user.id, "Registered user {}", user.username);

    Ok(ApiResponse::created(user)
        .with_message("User registered successfully")
        .as_user())
}
