//! Unified error type for the recommendation client.

use thiserror::Error;

use super::category::ErrorCategory;
use super::network::NetworkError;
use super::stream::StreamError;
use crate::traits::HttpError;

/// Every error the client can report.
///
/// Per-event payload problems never become a `ClientError`; they are
/// dropped inside the stream. A `ClientError` is what the failure callback
/// receives.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request could not be sent or was answered with an error status.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// Response body failed or could not be read.
    #[error(transparent)]
    Stream(#[from] StreamError),

    /// Request rejected before anything was sent.
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
}

impl ClientError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::Network(NetworkError::HttpStatus { status, .. }) => match *status {
                408 | 429 => ErrorCategory::Network,
                400..=499 => ErrorCategory::User,
                _ => ErrorCategory::Server,
            },
            ClientError::Network(NetworkError::InvalidUrl { .. }) => ErrorCategory::Client,
            ClientError::Network(NetworkError::InvalidResponse { .. }) => ErrorCategory::Server,
            ClientError::Network(_) => ErrorCategory::Network,
            ClientError::Stream(StreamError::ConnectionLost { .. }) => ErrorCategory::Network,
            ClientError::Stream(StreamError::UnreadableBody { .. }) => ErrorCategory::Server,
            ClientError::InvalidRequest { .. } => ErrorCategory::User,
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Network(err) => err.is_retryable(),
            ClientError::Stream(err) => err.is_retryable(),
            ClientError::InvalidRequest { .. } => false,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network(err) => err.user_message(),
            ClientError::Stream(err) => err.user_message(),
            ClientError::InvalidRequest { message } => message.clone(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Network(err) => err.error_code(),
            ClientError::Stream(err) => err.error_code(),
            ClientError::InvalidRequest { .. } => "E_REQ_INVALID",
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}

impl From<HttpError> for ClientError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
                url: String::new(),
                message,
            }
            .into(),
            HttpError::Timeout(message) => NetworkError::Timeout { message }.into(),
            HttpError::ServerError { status, message } => {
                NetworkError::HttpStatus { status, message }.into()
            }
            HttpError::Cancelled => NetworkError::Cancelled.into(),
            HttpError::Io(message) => StreamError::ConnectionLost { message }.into(),
            HttpError::InvalidUrl(url) => NetworkError::InvalidUrl { url }.into(),
            HttpError::BodyUnavailable(message) => StreamError::UnreadableBody { message }.into(),
            HttpError::Other(message) => NetworkError::Other { message }.into(),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        NetworkError::InvalidResponse {
            message: err.to_string(),
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_keeps_status_and_body() {
        let err: ClientError = HttpError::ServerError {
            status: 503,
            message: "El servicio no pudo completar la petición".to_string(),
        }
        .into();

        assert!(matches!(
            err,
            ClientError::Network(NetworkError::HttpStatus { status: 503, .. })
        ));
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("El servicio no pudo completar la petición"));
        assert_eq!(err.category(), ErrorCategory::Server);
        assert!(err.is_retryable());
    }

    #[test]
    fn test_io_error_is_connection_lost() {
        let err: ClientError = HttpError::Io("reset".to_string()).into();
        assert!(matches!(
            err,
            ClientError::Stream(StreamError::ConnectionLost { .. })
        ));
        assert_eq!(err.category(), ErrorCategory::Network);
    }

    #[test]
    fn test_body_unavailable_is_unreadable_body() {
        let err: ClientError = HttpError::BodyUnavailable("204".to_string()).into();
        assert_eq!(err.error_code(), "E_STREAM_BODY");
    }

    #[test]
    fn test_client_side_rejection() {
        let err: ClientError = HttpError::ServerError {
            status: 422,
            message: "empty".to_string(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::User);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_invalid_request() {
        let err = ClientError::InvalidRequest {
            message: "Query must not be empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid request: Query must not be empty");
        assert_eq!(err.user_message(), "Query must not be empty");
        assert_eq!(err.category(), ErrorCategory::User);
        assert_eq!(err.recovery_hint(), ErrorCategory::User.recovery_hint());
    }

    #[test]
    fn test_json_error_is_invalid_response() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ClientError = json_err.into();
        assert_eq!(err.error_code(), "E_NET_INVALID");
    }
}
