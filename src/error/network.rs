//! Network-related error types.
//!
//! This module defines errors that occur while issuing requests and reading
//! responses, including non-success HTTP statuses.

use std::fmt;

/// Network-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// Connection to the server failed.
    ConnectionFailed {
        url: String,
        message: String,
    },

    /// Request timed out.
    Timeout {
        message: String,
    },

    /// HTTP status error (non-2xx response), with the response body text.
    HttpStatus {
        status: u16,
        message: String,
    },

    /// The configured URL could not be used.
    InvalidUrl {
        url: String,
    },

    /// Response body did not have the expected shape.
    InvalidResponse {
        message: String,
    },

    /// Request was cancelled.
    Cancelled,

    /// Generic network error.
    Other {
        message: String,
    },
}

impl NetworkError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::ConnectionFailed { .. } => true,
            NetworkError::Timeout { .. } => true,
            NetworkError::HttpStatus { status, .. } => {
                *status >= 500 || *status == 429 || *status == 408
            }
            NetworkError::InvalidUrl { .. } => false,
            NetworkError::InvalidResponse { .. } => false,
            NetworkError::Cancelled => false,
            NetworkError::Other { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { url, .. } => {
                format!("Unable to reach the recommendation service at {}.", url)
            }
            NetworkError::Timeout { .. } => {
                "The recommendation service took too long to answer.".to_string()
            }
            NetworkError::HttpStatus { status, message } => match *status {
                422 => format!("The request was rejected: {}", message),
                429 => "Too many requests. Please wait a moment and try again.".to_string(),
                503 => format!("The service could not complete the request: {}", message),
                500..=599 => "The service is experiencing issues. Please try again later.".to_string(),
                _ => format!("The service returned an error (HTTP {}).", status),
            },
            NetworkError::InvalidUrl { url } => {
                format!("'{}' is not a valid API URL.", url)
            }
            NetworkError::InvalidResponse { .. } => {
                "Received an invalid response from the service.".to_string()
            }
            NetworkError::Cancelled => "The request was cancelled.".to_string(),
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidUrl { .. } => "E_NET_URL",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::Cancelled => "E_NET_CANCEL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::ConnectionFailed { url, message } => {
                write!(f, "Connection failed to '{}': {}", url, message)
            }
            NetworkError::Timeout { message } => write!(f, "Request timed out: {}", message),
            NetworkError::HttpStatus { status, message } => {
                write!(f, "HTTP {} error: {}", status, message)
            }
            NetworkError::InvalidUrl { url } => write!(f, "Invalid URL: {}", url),
            NetworkError::InvalidResponse { message } => {
                write!(f, "Invalid response: {}", message)
            }
            NetworkError::Cancelled => write!(f, "Request cancelled"),
            NetworkError::Other { message } => write!(f, "Network error: {}", message),
        }
    }
}

impl std::error::Error for NetworkError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_retry_policy() {
        let server = NetworkError::HttpStatus {
            status: 503,
            message: "busy".to_string(),
        };
        let rejected = NetworkError::HttpStatus {
            status: 422,
            message: "La query no puede estar vacía".to_string(),
        };
        assert!(server.is_retryable());
        assert!(!rejected.is_retryable());
        assert!(rejected.user_message().contains("La query no puede estar vacía"));
    }

    #[test]
    fn test_display_includes_status_and_body() {
        let err = NetworkError::HttpStatus {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500 error: Internal Server Error");
        assert_eq!(err.error_code(), "E_NET_HTTP");
    }

    #[test]
    fn test_connection_failed() {
        let err = NetworkError::ConnectionFailed {
            url: "http://localhost:8000".to_string(),
            message: "refused".to_string(),
        };
        assert!(err.is_retryable());
        assert!(err.user_message().contains("http://localhost:8000"));
    }

    #[test]
    fn test_cancelled_not_retryable() {
        assert!(!NetworkError::Cancelled.is_retryable());
        assert_eq!(NetworkError::Cancelled.error_code(), "E_NET_CANCEL");
    }
}
