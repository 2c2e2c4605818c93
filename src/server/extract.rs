//! Axum extractor for `Authorization: ApiKey <token>`

use axum::{
    Json,
    extract::FromRequestParts,
    http::{HeaderValue, StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};
use sha2::{Digest, Sha256};

use crate::common::auth::{self, API_KEY_SCHEME, AuthError};

use super::types::ErrorResponse;

/// API key presented by the caller
///
/// Extraction only checks the header shape. Whether the key is known is up to
/// the handler.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

impl ApiKey {
    /// Short hex fingerprint, safe to log or return
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        hex::encode(&digest[..8])
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&self.fingerprint()).finish()
    }
}

/// Rejection returned when [`ApiKey`] extraction fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthRejection(pub AuthError);

impl From<AuthError> for AuthRejection {
    fn from(e: AuthError) -> Self {
        Self(e)
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let body = ErrorResponse::authentication_error(self.0.to_string());
        (
            StatusCode::UNAUTHORIZED,
            [(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(API_KEY_SCHEME),
            )],
            Json(body),
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Already extracted by api_key_middleware
        if let Some(key) = parts.extensions.get::<ApiKey>() {
            return Ok(key.clone());
        }

        auth::extract_api_key(&parts.headers)
            .map(ApiKey)
            .inspect_err(|e| tracing::warn!(reason = ?e, "Rejecting request: {}", e))
            .map_err(AuthRejection::from)
    }
}
