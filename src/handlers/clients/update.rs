// handlers/clients/update.rs - PUT /api/clients/:id handler

use axum::extract::{Path, State};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::database::models::Client;
use crate::database::ClientChanges;
use crate::error::{ApiError, ResultExt};
use crate::handlers::{non_blank, within_length};
use crate::middleware::{ApiJson, ApiResponse, ApiResult};
use crate::state::AppState;

use super::{
    parse_client_id, status_from_json, validate_harga_dibayar, validate_total_harga, CLIENT_NOT_FOUND, INVALID_STATUS,
};

#[derive(Debug, Deserialize)]
pub struct UpdateClientRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub nama_project: Option<String>,
    pub detail_project: Option<String>,
    pub total_harga: Option<Decimal>,
    pub harga_dibayar: Option<Decimal>,
    pub status_pembayaran: Option<Value>,
}

impl UpdateClientRequest {
    fn into_changes(self) -> Result<ClientChanges, ApiError> {
        let status = self
            .status_pembayaran
            .ok_or_else(|| ApiError::validation_error(INVALID_STATUS))?;

        Ok(ClientChanges {
            username: non_blank(self.username).map(|v| within_length("username", v)).transpose()?,
            email: non_blank(self.email).map(|v| within_length("email", v)).transpose()?,
            nama_project: non_blank(self.nama_project)
                .map(|v| within_length("nama_project", v))
                .transpose()?,
            detail_project: non_blank(self.detail_project),
            total_harga: self.total_harga.map(validate_total_harga).transpose()?,
            harga_dibayar: self.harga_dibayar.map(validate_harga_dibayar).transpose()?,
            status_pembayaran: status_from_json(&status)?,
        })
    }
}

/// PUT /api/clients/:id - change a client's fields
///
/// status_pembayaran is required; any other omitted or blank field keeps
/// its stored value. Responds with the row as stored after the update.
pub async fn client_put(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateClientRequest>,
) -> ApiResult<Client> {
    let changes = payload.into_changes()?;
    let id = parse_client_id(&id)?;

    let client = state
        .clients
        .update(id, changes)
        .await
        .or_internal("Failed to update client")?
        .ok_or_else(|| ApiError::not_found(CLIENT_NOT_FOUND))?;

    tracing::info!(id_client = %client.id_client, "Updated client, status {}", client.status_pembayaran);

    Ok(ApiResponse::success(client).with_message("Client updated successfully"))
}
