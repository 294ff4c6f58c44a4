//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let client = MockHttpConfig::new()
//!     .with_stream_chunks(&[END_TO_END_STREAM])
//!     .build_client();
//! let (handler, outcome) = run_stream(&client, &request("q")).await;
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use cinematch::traits::HttpClient;
use cinematch::{CancelSignal, RecommendClient, StreamOutcome};
use cinematch::models::RecommendRequest;

/// The reference stream: a phase, two tokens and completion.
pub const END_TO_END_STREAM: &str = "event: status\ndata: {\"phase\":\"searching\"}\n\nevent: token\ndata:  Hola\n\nevent: token\ndata:  mundo\n\nevent: done\ndata: {\"session_id\":\"abc\"}\n\n";

/// A request for `query` with default settings.
pub fn request(query: &str) -> RecommendRequest {
    RecommendRequest::new(query)
}

/// Stream `request` into a fresh [`RecordingHandler`].
pub async fn run_stream<C: HttpClient>(
    client: &RecommendClient<C>,
    request: &RecommendRequest,
) -> (RecordingHandler, StreamOutcome) {
    let mut handler = RecordingHandler::new();
    let outcome = client
        .stream_recommendations(request, &mut handler, CancelSignal::never())
        .await;
    (handler, outcome)
}

/// Callback sequence for [`END_TO_END_STREAM`].
pub fn end_to_end_calls() -> Vec<HandlerCall> {
    vec![
        HandlerCall::Phase(cinematch::models::PipelinePhase::Searching),
        HandlerCall::Token(" Hola".to_string()),
        HandlerCall::Token(" mundo".to_string()),
        HandlerCall::Done("abc".to_string()),
    ]
}
