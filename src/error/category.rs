//! Error category classification for unified error handling.
//!
//! This module provides a high-level categorization of errors to enable
//! consistent handling and user messaging.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Network-related errors (connection, timeout, dropped stream).
    /// Generally transient and retryable.
    Network,

    /// Backend errors (HTTP 5xx, unusable response).
    /// Generally transient and retryable after delay.
    Server,

    /// Client-side errors (bad URL, invalid state).
    /// Not retryable.
    Client,

    /// User action required (empty query, rejected input).
    /// Not retryable until the user changes the request.
    User,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient
    /// and the operation can be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your connection and try again.",
            ErrorCategory::Server => "The service is having trouble. Try again in a moment.",
            ErrorCategory::Client => "Check the configured API URL.",
            ErrorCategory::User => "Rephrase your request and try again.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
