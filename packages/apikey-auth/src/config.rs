use actix_web::http::header::{HeaderMap, HeaderName, AUTHORIZATION};
use std::env;

use crate::auth::api_key::{extract_api_key, DEFAULT_SCHEME};
use crate::error::ApiKeyResult;

/// Where and how the API key is read from a request
///
/// Register with `App::app_data` (plain or wrapped in `web::Data`) to change
/// what the extractors look for. Without it they use [`ApiKeyConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyConfig {
    /// Header carrying the key
    pub header: HeaderName,
    /// Token that must precede the key, separated by a single space
    pub scheme: String,
}

impl Default for ApiKeyConfig {
    fn default() -> Self {
        Self {
            header: AUTHORIZATION,
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

impl ApiKeyConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let header = match env::var("API_KEY_HEADER") {
            Ok(name) => {
                HeaderName::try_from(name.trim()).map_err(|_| ConfigError::InvalidHeaderName)?
            }
            Err(_) => {
                log::info!("API_KEY_HEADER not set, using {}", AUTHORIZATION);
                AUTHORIZATION
            }
        };

        let scheme = match env::var("API_KEY_SCHEME") {
            Ok(scheme) => scheme,
            Err(_) => {
                log::info!("API_KEY_SCHEME not set, using {}", DEFAULT_SCHEME);
                DEFAULT_SCHEME.to_string()
            }
        };

        // The scheme is split from the key on the first space
        if scheme.is_empty() || scheme.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidScheme);
        }

        Ok(Self { header, scheme })
    }

    /// Reads the key using this header and scheme
    pub fn extract(&self, headers: &HeaderMap) -> ApiKeyResult<String> {
        extract_api_key(headers, &self.header, &self.scheme)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidHeaderName,
    InvalidScheme,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidHeaderName => {
                write!(f, "API_KEY_HEADER must be a valid HTTP header name")
            }
            ConfigError::InvalidScheme => {
                write!(f, "API_KEY_SCHEME must be non-empty and contain no whitespace")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
