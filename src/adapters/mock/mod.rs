//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with scripted responses and chunk streams
//! - [`RecordingHandler`] - Stream handler that records every callback

pub mod handler;
pub mod http;

pub use handler::{HandlerCall, RecordingHandler};
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
