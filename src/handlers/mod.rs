// handlers/mod.rs - HTTP handlers, one file per endpoint
//
// conn    -> GET /api/conn
// users   -> POST /api/register, POST /api/login
// clients -> /api/clients[/:id]

pub mod clients;
pub mod conn;
pub mod root;
pub mod users;

use crate::error::ApiError;

/// Longest value the VARCHAR(255) columns hold
pub(crate) const MAX_TEXT_LENGTH: usize = 255;

/// The field's value when it is present and not blank
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Reject text longer than its column, counted in characters as Postgres does
pub(crate) fn within_length(field: &str, value: String) -> Result<String, ApiError> {
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(ApiError::validation_error(format!(
            "{} must be at most {} characters",
            field, MAX_TEXT_LENGTH
        )));
    }
    Ok(value)
}
