//! Request middleware

use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::common::auth;

use super::extract::{ApiKey, AuthRejection};

/// API key extraction middleware
///
/// Stores the [`ApiKey`] in request extensions on success. Requests without a
/// well-formed `Authorization: ApiKey <token>` header never reach the inner
/// service.
pub async fn api_key_middleware(mut request: Request<Body>, next: Next) -> Response {
    match auth::extract_api_key(request.headers()) {
        Ok(key) => {
            request.extensions_mut().insert(ApiKey(key));
            next.run(request).await
        }
        Err(e) => {
            tracing::warn!(
                reason = ?e,
                method = %request.method(),
                path = %request.uri().path(),
                "Rejecting request: {}",
                e
            );
            AuthRejection::from(e).into_response()
        }
    }
}

/// CORS middleware layer
///
/// Allows any origin, method and header.
pub fn cors_layer() -> tower_http::cors::CorsLayer {
    use tower_http::cors::{Any, CorsLayer};

    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
