//! Streaming-related error types.
//!
//! This module defines errors that occur while reading an SSE response body
//! after the request itself succeeded.

use std::fmt;

/// Stream-specific error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum StreamError {
    /// The body failed part-way through.
    ConnectionLost {
        message: String,
    },

    /// The response succeeded but carried no readable body.
    UnreadableBody {
        message: String,
    },
}

impl StreamError {
    /// Check if this error is likely transient and can be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, StreamError::ConnectionLost { .. })
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            StreamError::ConnectionLost { .. } => {
                "The connection was lost while receiving recommendations.".to_string()
            }
            StreamError::UnreadableBody { .. } => {
                "The service answered without any recommendations stream.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            StreamError::ConnectionLost { .. } => "E_STREAM_CONN",
            StreamError::UnreadableBody { .. } => "E_STREAM_BODY",
        }
    }
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::ConnectionLost { message } => {
                write!(f, "Stream connection lost: {}", message)
            }
            StreamError::UnreadableBody { message } => {
                write!(f, "Response body not readable: {}", message)
            }
        }
    }
}

impl std::error::Error for StreamError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_lost_is_retryable() {
        let err = StreamError::ConnectionLost {
            message: "socket closed".to_string(),
        };
        assert!(err.is_retryable());
        assert_eq!(err.error_code(), "E_STREAM_CONN");
        assert_eq!(err.to_string(), "Stream connection lost: socket closed");
    }

    #[test]
    fn test_unreadable_body_not_retryable() {
        let err = StreamError::UnreadableBody {
            message: "204 No Content".to_string(),
        };
        assert!(!err.is_retryable());
        assert_eq!(err.error_code(), "E_STREAM_BODY");
    }
}
