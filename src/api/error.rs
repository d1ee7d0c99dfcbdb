//! Backend client error types
//!
//! Every failure the REST client can produce, from a bad base URL to a
//! response body that does not match the expected shape.

use thiserror::Error;

/// Errors that can occur when talking to the trend backend
#[derive(Error, Debug)]
pub enum ApiError {
    /// Base URL could not be parsed
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Transport-level failure not covered by a more specific variant
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Backend could not be reached
    #[error("Backend unavailable")]
    Unavailable,

    /// Backend answered with a non-success status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Classify a reqwest error the same way for every endpoint
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::Unavailable
        } else {
            ApiError::Request(err)
        }
    }
}

/// Result type alias for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "API error 500: boom");

        let err = ApiError::InvalidBaseUrl {
            url: "nope".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid base URL nope: relative URL without a base"
        );
    }

    #[test]
    fn test_decode_error_keeps_endpoint() {
        let source = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err = ApiError::Decode {
            endpoint: "trending",
            source,
        };
        assert!(err.to_string().starts_with("Failed to decode trending response"));
    }
}
