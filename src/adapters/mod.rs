//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Scripted HTTP responses and body chunks
//! - [`mock::RecordingHandler`] - Records stream callbacks

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, RecordingHandler};
pub use reqwest_http::ReqwestHttpClient;
