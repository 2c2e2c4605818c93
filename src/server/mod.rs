//! HTTP service module
//!
//! Wires the `Authorization: ApiKey <token>` parser into axum.
//!
//! # Usage example
//! ```rust,ignore
//! use apikey_auth::{model::config::Config, server};
//!
//! let app = server::create_router(&Config::default());
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

mod extract;
mod handlers;
mod middleware;
mod router;
pub mod types;

pub use extract::{ApiKey, AuthRejection};
pub use middleware::api_key_middleware;
pub use router::create_router;
