use axum::extract::{Path, State};

use crate::database::models::Client;
use crate::error::{ApiError, ResultExt};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

use super::{parse_client_id, CLIENT_NOT_FOUND};

/// GET /api/clients/:id - show a single client
pub async fn client_get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Client> {
    let id = parse_client_id(&id)?;

    state
        .clients
        .find(id)
        .await
        .or_internal("Failed to fetch client")?
        .map(ApiResponse::success)
        .ok_or_else(|| ApiError::not_found(CLIENT_NOT_FOUND))
}
