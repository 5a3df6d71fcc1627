use actix_web::http::header::{HeaderMap, HeaderName, AUTHORIZATION};
use std::fmt;

use crate::error::{ApiKeyError, ApiKeyResult};

/// Scheme token expected before the key: `Authorization: ApiKey <key>`
pub const DEFAULT_SCHEME: &str = "ApiKey";

/// Extracts the API key from the `Authorization` header
///
/// Only the first header value is consulted. A missing or empty header
/// yields [`ApiKeyError::NoAuthHeader`]; anything other than
/// `ApiKey <key>` yields [`ApiKeyError::MalformedHeader`].
pub fn get_api_key(headers: &HeaderMap) -> ApiKeyResult<String> {
    extract_api_key(headers, &AUTHORIZATION, DEFAULT_SCHEME)
}

/// Same as [`get_api_key`] with a custom header name and scheme token
pub fn extract_api_key(
    headers: &HeaderMap,
    header: &HeaderName,
    scheme: &str,
) -> ApiKeyResult<String> {
    let value = match headers.get(header) {
        Some(value) if !value.is_empty() => value,
        _ => {
            log::debug!("Request has no {} header", header);
            return Err(ApiKeyError::NoAuthHeader);
        }
    };

    let value = value.to_str().map_err(|_| {
        log::debug!("{} header contains non-visible ASCII characters", header);
        ApiKeyError::MalformedHeader
    })?;

    parse_auth_value(value, scheme)
        .map(str::to_string)
        .inspect_err(|_| log::debug!("{} header is not of the form '{} <key>'", header, scheme))
}

/// Splits `<scheme> <key>` at the first space and returns the key
///
/// The scheme must match exactly and both halves must be non-empty.
pub fn parse_auth_value<'a>(value: &'a str, scheme: &str) -> ApiKeyResult<&'a str> {
    match value.split_once(' ') {
        Some((prefix, key)) if prefix == scheme && !key.is_empty() => Ok(key),
        _ => Err(ApiKeyError::MalformedHeader),
    }
}

/// An API key read from a request
///
/// `Debug` only shows the first few characters so the key can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Up to 4 leading chars followed by `...`, never more than half the key
    pub fn masked(&self) -> String {
        let shown = (self.0.chars().count() / 2).min(4);
        let prefix: String = self.0.chars().take(shown).collect();
        format!("{}...", prefix)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.masked()).finish()
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
