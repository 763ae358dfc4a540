use axum::extract::{Path, State};

use crate::error::{ApiError, ResultExt};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::{parse_client_id, CLIENT_NOT_FOUND};

/// DELETE /api/clients/:id
pub async fn client_delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    let id = parse_client_id(&id)?;

    let deleted = state.clients.delete(id).await.or_internal("Failed to delete client")?;
    if !deleted {
        return Err(ApiError::not_found(CLIENT_NOT_FOUND));
    }

    tracing::info!(id_client = %id, "Deleted client");
    Ok(ApiResponse::message("Client deleted successfully"))
}
