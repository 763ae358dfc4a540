use axum::response::Json;
use serde_json::{json, Value};

/// GET / - service banner
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Client Ledger API",
            "version": version,
            "endpoints": {
                "conn": "GET /api/conn",
                "register": "POST /api/register",
                "login": "POST /api/login",
                "clients": "GET, POST /api/clients",
                "client": "GET, PUT, DELETE /api/clients/:id",
            }
        }
    }))
}
