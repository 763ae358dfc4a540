use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{self, SecurityConfig};
use crate::handlers;
use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let config = config::config();

    let mut router = Router::new()
        // Public
        .route("/", get(handlers::root::root))
        .nest("/api", api_routes())
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .with_state(state);

    if let Some(cors) = cors_layer(&config.security) {
        router = router.layer(cors);
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(conn_routes())
        .merge(user_routes())
        .merge(client_routes())
}

fn conn_routes() -> Router<AppState> {
    Router::new().route("/conn", get(handlers::conn::conn_get))
}

fn user_routes() -> Router<AppState> {
    use handlers::users;

    Router::new()
        .route("/register", post(users::register_post))
        .route("/login", post(users::login_post))
}

fn client_routes() -> Router<AppState> {
    use handlers::clients;

    Router::new()
        // Collection
        .route("/clients", get(clients::clients_get).post(clients::client_post))
        // Single record
        .route(
            "/clients/:id",
            get(clients::client_get)
                .put(clients::client_put)
                .delete(clients::client_delete),
        )
}

/// No layer when CORS is off; an empty origin list allows any origin
fn cors_layer(security: &SecurityConfig) -> Option<CorsLayer> {
    if !security.enable_cors {
        return None;
    }

    if security.cors_origins.is_empty() {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any),
    )
}
