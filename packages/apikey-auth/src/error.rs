use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

/// Reasons an API key could not be read from a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiKeyError {
    /// Header is missing or has an empty value
    #[error("no authorization header included")]
    NoAuthHeader,

    /// Header is present but not of the form `<scheme> <key>`
    #[error("malformed authorization header")]
    MalformedHeader,
}

impl ResponseError for ApiKeyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiKeyError::NoAuthHeader => StatusCode::UNAUTHORIZED,
            ApiKeyError::MalformedHeader => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error_type = match self {
            ApiKeyError::NoAuthHeader => "Unauthorized",
            ApiKeyError::MalformedHeader => "BadRequest",
        };

        let response = ErrorResponse {
            error: ErrorDetail {
                error_type: error_type.to_string(),
                message: self.to_string(),
            },
        };

        HttpResponse::build(self.status_code()).json(response)
    }
}

/// Result type alias for key extraction
pub type ApiKeyResult<T> = Result<T, ApiKeyError>;
