//! API key extraction for actix-web
//!
//! Reads `Authorization: ApiKey <key>` headers. Key verification is left to
//! the caller.

pub mod auth;
pub mod config;
pub mod error;

pub use auth::{get_api_key, ApiKey, MaybeApiKey};
pub use config::ApiKeyConfig;
pub use error::ApiKeyError;
