//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `cinematch::adapters::mock` and adds a builder
//! for scripted stream scenarios.

pub use cinematch::adapters::mock::{HandlerCall, MockHttpClient, MockResponse, RecordingHandler};
pub use cinematch::traits::{HttpError, Response};

use bytes::Bytes;
use cinematch::RecommendClient;

/// Base URL every mock client is built with.
pub const MOCK_BASE: &str = "http://cinematch.test";

/// URL the streaming endpoint is reached at on [`MOCK_BASE`].
pub const MOCK_STREAM_URL: &str = "http://cinematch.test/api/recommend/stream";

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    /// Creates a new mock HTTP configuration.
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Stream body delivered as exactly these chunks.
    pub fn with_stream_chunks<S: AsRef<str>>(self, chunks: &[S]) -> Self {
        self.client
            .set_response(MOCK_STREAM_URL, MockResponse::chunks(chunks));
        self
    }

    /// Stream body delivered as these raw byte chunks.
    pub fn with_stream_bytes(self, chunks: Vec<Vec<u8>>) -> Self {
        self.client.set_response(
            MOCK_STREAM_URL,
            MockResponse::Stream(chunks.into_iter().map(Bytes::from).collect()),
        );
        self
    }

    /// Stream body that fails after these chunks.
    pub fn with_stream_failure(self, chunks: &[&str], error: HttpError) -> Self {
        self.client.set_response(
            MOCK_STREAM_URL,
            MockResponse::StreamThenError(
                chunks.iter().map(|c| Bytes::from(c.to_string())).collect(),
                error,
            ),
        );
        self
    }

    /// Stream body that stalls after these chunks.
    pub fn with_stalled_stream(self, chunks: &[&str]) -> Self {
        self.client.set_response(
            MOCK_STREAM_URL,
            MockResponse::StreamThenHang(chunks.iter().map(|c| Bytes::from(c.to_string())).collect()),
        );
        self
    }

    /// Streaming endpoint answers with a non-success status.
    pub fn with_stream_status(self, status: u16, body: &str) -> Self {
        self.client.set_response(
            MOCK_STREAM_URL,
            MockResponse::Success(Response::new(status, body.to_string())),
        );
        self
    }

    /// Builds the configured MockHttpClient.
    pub fn build(self) -> MockHttpClient {
        self.client
    }

    /// Builds a client over the configured mock.
    pub fn build_client(self) -> RecommendClient<MockHttpClient> {
        RecommendClient::with_http(MOCK_BASE, self.client)
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
