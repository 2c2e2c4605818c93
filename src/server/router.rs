//! Route configuration

use axum::{Router, middleware, routing::get};

use crate::model::config::Config;

use super::{
    handlers::{health, whoami},
    middleware::{api_key_middleware, cors_layer},
};

/// Create the HTTP router
///
/// # Endpoints
/// - `GET /health` - Liveness check, no authentication
/// - `GET /v1/whoami` - Fingerprint of the presented API key
///
/// # Authentication
/// All `/v1` paths require `Authorization: ApiKey <token>`.
pub fn create_router(config: &Config) -> Router {
    let v1_routes = Router::new()
        .route("/whoami", get(whoami))
        .layer(middleware::from_fn(api_key_middleware));

    let app = Router::new()
        .route("/health", get(health))
        .nest("/v1", v1_routes);

    if config.cors_enabled {
        app.layer(cors_layer())
    } else {
        app
    }
}
