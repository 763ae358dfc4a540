// handlers/clients/mod.rs - client project bookkeeping
//
// POST   /api/clients      -> create
// GET    /api/clients      -> list (newest first)
// GET    /api/clients/:id  -> get
// PUT    /api/clients/:id  -> update
// DELETE /api/clients/:id  -> delete

use rust_decimal::Decimal;
use serde_json::Value;
use uuid::Uuid;

use crate::database::models::PaymentStatus;
use crate::error::ApiError;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use create::client_post;
pub use delete::client_delete;
pub use get::client_get;
pub use list::clients_get;
pub use update::client_put;

pub(crate) const CLIENT_NOT_FOUND: &str = "Client not found";
pub(crate) const INVALID_STATUS: &str = "Invalid status_pembayaran value. Must be pending, partial, or paid";

/// A path id that is not a UUID cannot name any client
pub(crate) fn parse_client_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|_| ApiError::not_found(CLIENT_NOT_FOUND))
}

pub(crate) fn parse_status(status: &str) -> Result<PaymentStatus, ApiError> {
    status
        .parse::<PaymentStatus>()
        .map_err(|_| ApiError::validation_error(INVALID_STATUS))
}

/// Any JSON value other than a known status string is invalid
pub(crate) fn status_from_json(value: &Value) -> Result<PaymentStatus, ApiError> {
    match value.as_str() {
        Some(status) => parse_status(status),
        None => Err(ApiError::validation_error(INVALID_STATUS)),
    }
}

// Amount columns are NUMERIC(15,2)
const AMOUNT_SCALE: u32 = 2;
const AMOUNT_INTEGER_DIGITS: u32 = 13;

/// Bring an amount to the stored scale, rejecting what the column cannot hold
fn fit_amount(field: &str, amount: Decimal) -> Result<Decimal, ApiError> {
    let mut amount = amount.normalize();
    if amount.scale() > AMOUNT_SCALE {
        return Err(ApiError::validation_error(format!(
            "{} cannot have more than {} decimal places",
            field, AMOUNT_SCALE
        )));
    }

    let limit = Decimal::from(10_i64.pow(AMOUNT_INTEGER_DIGITS));
    if amount.abs() >= limit {
        return Err(ApiError::validation_error(format!("{} must be less than {}", field, limit)));
    }

    amount.rescale(AMOUNT_SCALE);
    Ok(amount)
}

pub(crate) fn validate_total_harga(total_harga: Decimal) -> Result<Decimal, ApiError> {
    if total_harga <= Decimal::ZERO {
        return Err(ApiError::validation_error("total_harga must be greater than 0"));
    }
    fit_amount("total_harga", total_harga)
}

pub(crate) fn validate_harga_dibayar(harga_dibayar: Decimal) -> Result<Decimal, ApiError> {
    if harga_dibayar < Decimal::ZERO {
        return Err(ApiError::validation_error("harga_dibayar cannot be negative"));
    }
    fit_amount("harga_dibayar", harga_dibayar)
}
