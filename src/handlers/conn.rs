use axum::extract::State;

use crate::error::ResultExt;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/conn - report whether the database answers
pub async fn conn_get(State(state): State<AppState>) -> ApiResult<()> {
    state.conn.ping().await.or_internal("Database connection failed")?;
    Ok(ApiResponse::message("Database connection successful"))
}
