use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::api_key::ApiKey;
use crate::config::ApiKeyConfig;
use crate::error::ApiKeyError;

fn extract(req: &HttpRequest) -> Result<ApiKey, ApiKeyError> {
    let config = req
        .app_data::<ApiKeyConfig>()
        .or_else(|| req.app_data::<web::Data<ApiKeyConfig>>().map(|d| d.get_ref()));

    let key = match config {
        Some(config) => config.extract(req.headers())?,
        None => ApiKeyConfig::default().extract(req.headers())?,
    };

    Ok(ApiKey::new(key))
}

/// Extractor for the API key (requests without one are rejected)
///
/// Usage in handlers:
/// ```ignore
/// async fn my_handler(key: ApiKey) -> HttpResponse {
///     // key.as_str() is the raw key, still unverified
/// }
/// ```
impl FromRequest for ApiKey {
    type Error = ApiKeyError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract(req))
    }
}

/// Extractor for endpoints that also serve anonymous requests
///
/// A missing header gives `MaybeApiKey(None)`. A malformed one is still
/// rejected with 400.
#[derive(Debug, Clone)]
pub struct MaybeApiKey(pub Option<ApiKey>);

impl MaybeApiKey {
    pub fn into_inner(self) -> Option<ApiKey> {
        self.0
    }
}

impl FromRequest for MaybeApiKey {
    type Error = ApiKeyError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(match extract(req) {
            Ok(key) => Ok(MaybeApiKey(Some(key))),
            Err(ApiKeyError::NoAuthHeader) => Ok(MaybeApiKey(None)),
            Err(e) => Err(e),
        })
    }
}
