//! Error types for the upscaling service client.
//!
//! Request-time errors are mapped to core port errors at the boundary.
//! [`HttpError`] is public only because client construction can fail.

use thiserror::Error;

/// Result type alias for client operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// Errors raised by the upscaling service client.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The service answered with a non-success status.
    #[error("Upscale request failed with status {status}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// Human-readable `detail` from the error body, if any
        detail: Option<String>,
    },

    /// The request could not be sent or its response could not be read.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The configured base URL does not form a valid endpoint.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = HttpError::ApiRequestFailed {
            status: 503,
            detail: None,
        };
        assert!(error.to_string().contains("503"));
    }

    #[test]
    fn test_invalid_url_error_message() {
        let error: HttpError = url::Url::parse("not a url").unwrap_err().into();
        assert!(error.to_string().starts_with("Invalid URL"));
    }
}
