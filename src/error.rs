//! Error types for the CoinCap client library.

use reqwest::StatusCode;
use thiserror::Error;

/// The main error type for all CoinCap client operations.
#[derive(Error, Debug)]
pub enum CoinCapError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON deserialization of a successful response failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CoinCap answered with a status other than 200
    #[error("{0}")]
    Api(ApiError),

    /// Request parameters could not be encoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl CoinCapError {
    /// Get the underlying API error, if this is one.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// A non-200 response returned by the CoinCap API.
///
/// Carries the raw status and body so callers can inspect the failing response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status of the response
    pub status: StatusCode,
    /// Raw response body, decoded as UTF-8 (lossy)
    pub body: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status.as_u16(), self.body)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error from a status and raw body.
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Numeric status code.
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// The body parsed as JSON, when it is valid JSON.
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }

    /// Check if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }

    /// Check if CoinCap rejected the request for exceeding its quota.
    pub fn is_rate_limited(&self) -> bool {
        self.status == StatusCode::TOO_MANY_REQUESTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new(StatusCode::NOT_FOUND, "404 Not Found Message");
        assert_eq!(error.to_string(), "404 404 Not Found Message");
    }

    #[test]
    fn test_coincap_error_display_matches_api_error() {
        let error = CoinCapError::Api(ApiError::new(StatusCode::BAD_REQUEST, "{\"error\":\"bad\"}"));
        assert_eq!(error.to_string(), "400 {\"error\":\"bad\"}");
        assert_eq!(error.as_api_error().unwrap().status_code(), 400);
    }

    #[test]
    fn test_api_error_json_body() {
        let error = ApiError::new(StatusCode::NOT_FOUND, "{\"message\":\"Not Found\"}");
        assert!(error.is_not_found());
        assert_eq!(error.json().unwrap()["message"], "Not Found");

        let error = ApiError::new(StatusCode::TOO_MANY_REQUESTS, "slow down");
        assert!(error.is_rate_limited());
        assert!(error.json().is_none());
    }
}
