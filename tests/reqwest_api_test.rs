//! Recommendation API tests over real HTTP using wiremock.
//!
//! These exercise the reqwest adapter end to end: request shape, streamed
//! bodies, status errors and the buffered endpoints.

mod common;

use common::*;

use cinematch::error::{ClientError, NetworkError, StreamError};
use cinematch::{ClientConfig, RecommendClient, StreamOutcome};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> RecommendClient {
    let config = ClientConfig::new()
        .with_base_url(server.uri())
        .with_request_timeout_secs(10);
    RecommendClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_stream_over_http() {
    let server = MockServer::start().await;
    let body = END_TO_END_STREAM.replace('\n', "\r\n");

    Mock::given(method("POST"))
        .and(path("/api/recommend/stream"))
        .and(header("accept", "text/event-stream"))
        .and(body_partial_json(serde_json::json!({
            "query": "algo para reír",
            "session_id": "prev",
            "max_results": 3,
            "language": "es"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/event-stream"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let req = request("algo para reír").with_session(Some("prev".to_string()));
    let (handler, outcome) = run_stream(&client, &req).await;

    assert_eq!(handler.calls(), end_to_end_calls().as_slice());
    assert_eq!(outcome.session_id(), Some("abc"));
}

#[tokio::test]
async fn test_stream_server_error_carries_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/recommend/stream"))
        .respond_with(ResponseTemplate::new(500).set_body_string("pipeline exploded"))
        .mount(&server)
        .await;

    let (handler, outcome) = run_stream(&client_for(&server), &request("q")).await;

    assert_eq!(handler.error_count(), 1);
    assert_eq!(handler.done_count(), 0);
    match outcome {
        StreamOutcome::Failed(ClientError::Network(NetworkError::HttpStatus { status, message })) => {
            assert_eq!(status, 500);
            assert_eq!(message, "pipeline exploded");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[tokio::test]
async fn test_stream_no_content_is_unreadable() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/recommend/stream"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let (handler, outcome) = run_stream(&client_for(&server), &request("q")).await;

    assert_eq!(handler.error_count(), 1);
    assert!(matches!(
        outcome,
        StreamOutcome::Failed(ClientError::Stream(StreamError::UnreadableBody { .. }))
    ));
}

#[tokio::test]
async fn test_recommend_buffered() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/recommend"))
        .and(body_partial_json(serde_json::json!({
            "query": "western",
            "filters": {"min_year": 1960, "min_rating": 7.0}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "session_id": "w1",
            "narrative": "Dos clásicos del oeste.",
            "recommendations": [
                {"tmdb_id": 429, "title": "The Good, the Bad and the Ugly", "year": 1966, "score": 9.5},
                {"tmdb_id": 335, "title": "Once Upon a Time in the West", "year": 1968, "score": 9.2}
            ],
            "processing_time_ms": 4200
        })))
        .mount(&server)
        .await;

    let req = request("western").with_filters(cinematch::models::RecommendFilters {
        min_year: Some(1960),
        min_rating: Some(7.0),
    });
    let response = client_for(&server).recommend(&req).await.unwrap();

    assert_eq!(response.session_id, "w1");
    assert_eq!(response.recommendations.len(), 2);
    assert_eq!(response.recommendations[1].year, 1968);
}

#[tokio::test]
async fn test_recommend_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/recommend"))
        .respond_with(ResponseTemplate::new(503).set_body_string("vLLM unavailable"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .recommend(&request("q"))
        .await
        .unwrap_err();
    assert!(err.is_retryable());
    assert!(err.to_string().contains("vLLM unavailable"));
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "vllm": "ok",
            "tmdb": "ok",
            "tmdb_genres": 19,
            "streaming": "sse-starlette"
        })))
        .mount(&server)
        .await;

    let health = client_for(&server).health().await.unwrap();
    assert!(health.is_ok());
    assert_eq!(health.streaming.as_deref(), Some("sse-starlette"));
}

#[tokio::test]
async fn test_connection_refused() {
    let config = ClientConfig::new().with_base_url("http://127.0.0.1:1");
    let client = RecommendClient::new(&config).unwrap();

    let (handler, outcome) = run_stream(&client, &request("q")).await;

    assert_eq!(handler.error_count(), 1);
    assert!(matches!(outcome, StreamOutcome::Failed(ClientError::Network(_))));
}
