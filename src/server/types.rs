//! HTTP response types

use serde::Serialize;

// === Error Response ===

/// API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

impl ErrorResponse {
    /// Create new error response
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                error_type: error_type.into(),
                message: message.into(),
            },
        }
    }

    /// Create authentication error response
    pub fn authentication_error(message: impl Into<String>) -> Self {
        Self::new("authentication_error", message)
    }
}

// === Endpoint Types ===

/// GET /health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /v1/whoami response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoAmIResponse {
    pub authenticated: bool,
    /// Truncated SHA-256 of the presented key, hex encoded
    pub key_fingerprint: String,
}
