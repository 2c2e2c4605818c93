//! HTTP handlers

use axum::{Json, response::IntoResponse};

use super::extract::ApiKey;
use super::types::{HealthResponse, WhoAmIResponse};

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// GET /v1/whoami
///
/// Reports the fingerprint of the presented key, never the key itself
pub async fn whoami(key: ApiKey) -> impl IntoResponse {
    let key_fingerprint = key.fingerprint();
    tracing::debug!(fingerprint = %key_fingerprint, "Received GET /v1/whoami request");

    Json(WhoAmIResponse {
        authenticated: true,
        key_fingerprint,
    })
}
