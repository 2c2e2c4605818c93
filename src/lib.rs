//! Parse `Authorization: ApiKey <token>` headers
//!
//! [`common::auth::extract_api_key`] is the core. The [`server`] module plugs
//! it into axum.

pub mod common;
pub mod model;
pub mod server;

pub use common::auth::{AuthError, extract_api_key};
