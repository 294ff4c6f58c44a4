//! Error handling for the recommendation client.
//!
//! - **Error Categories**: High-level classification for handling decisions
//! - **Domain-specific Errors**: Network and Stream errors
//! - **Unified Error Type**: `ClientError` consolidates them
//! - **Result Type Alias**: `ClientResult<T>`
//!
//! # Error Categories
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, timeout, dropped body | Yes |
//! | Server | 5xx, unusable response | Yes |
//! | Client | Bad configuration | No |
//! | User | Rejected input | No |

mod category;
mod client_error;
mod network;
mod stream;

pub use category::ErrorCategory;
pub use client_error::ClientError;
pub use network::NetworkError;
pub use stream::StreamError;

/// Type alias for Results using ClientError.
pub type ClientResult<T> = Result<T, ClientError>;
