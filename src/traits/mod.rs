//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, POST, streaming POST)
//! - [`StreamHandler`] - Callbacks for one recommendation stream

pub mod handler;
pub mod http;

pub use handler::StreamHandler;
pub use http::{ByteStream, Headers, HttpClient, HttpError, Response};
