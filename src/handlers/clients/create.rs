// handlers/clients/create.rs - POST /api/clients handler

use axum::extract::State;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::database::models::{Client, PaymentStatus};
use crate::database::NewClient;
use crate::error::{ApiError, ResultExt};
use crate::handlers::{non_blank, within_length};
use crate::middleware::{ApiJson, ApiResponse, ApiResult};
use crate::state::AppState;

use super::{status_from_json, validate_harga_dibayar, validate_total_harga};

#[derive(Debug, Deserialize)]
pub struct CreateClientRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub nama_project: Option<String>,
    pub detail_project: Option<String>,
    pub total_harga: Option<Decimal>,
    pub harga_dibayar: Option<Decimal>,
    pub status_pembayaran: Option<Value>,
}

impl CreateClientRequest {
    fn into_new_client(self) -> Result<NewClient, ApiError> {
        let (Some(username), Some(email), Some(nama_project), Some(detail_project), Some(total_harga)) = (
            non_blank(self.username),
            non_blank(self.email),
            non_blank(self.nama_project),
            non_blank(self.detail_project),
            self.total_harga,
        ) else {
            return Err(ApiError::validation_error("All fields are required"));
        };

        let status_pembayaran = match self.status_pembayaran {
            Some(status) => status_from_json(&status)?,
            None => PaymentStatus::default(),
        };

        Ok(NewClient {
            username: within_length("username", username)?,
            email: within_length("email", email)?,
            nama_project: within_length("nama_project", nama_project)?,
            detail_project,
            total_harga: validate_total_harga(total_harga)?,
            harga_dibayar: validate_harga_dibayar(self.harga_dibayar.unwrap_or(Decimal::ZERO))?,
            status_pembayaran,
        })
    }
}

/// POST /api/clients - record a new client project
///
/// Requires username, email, nama_project, detail_project and total_harga.
/// harga_dibayar defaults to 0 and status_pembayaran to "pending".
pub async fn client_post(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateClientRequest>,
) -> ApiResult<Client> {
    let new_client = payload.into_new_client()?;

    let client = state
        .clients
        .insert(new_client)
        .await
        .or_internal("Failed to create client")?;

    tracing::info!(id_client = %client.id_client, "Created client project {}", client.nama_project);

    Ok(ApiResponse::created(client).with_message("Client created successfully"))
}
