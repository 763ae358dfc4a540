use axum::extract::State;

use crate::database::models::Client;
use crate::error::ResultExt;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/clients - every client, newest first
pub async fn clients_get(State(state): State<AppState>) -> ApiResult<Vec<Client>> {
    let clients = state.clients.list().await.or_internal("Failed to fetch clients")?;
    Ok(ApiResponse::success(clients))
}
