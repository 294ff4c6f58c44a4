//! Pull-style event stream.

mod common;

use common::*;
use futures::StreamExt;

use cinematch::error::ClientError;
use cinematch::models::PipelinePhase;
use cinematch::sse::StreamEvent;

#[tokio::test]
async fn test_events_match_push_order() {
    let start = END_TO_END_STREAM.find("data:  mundo").unwrap() + 7;
    let (first, second) = END_TO_END_STREAM.split_at(start);
    let client = MockHttpConfig::new()
        .with_stream_chunks(&[first, second])
        .build_client();

    let events: Vec<StreamEvent> = client
        .events(&request("q"))
        .await
        .unwrap()
        .map(|item| item.unwrap())
        .collect()
        .await;

    assert_eq!(
        events,
        vec![
            StreamEvent::Status {
                phase: PipelinePhase::Searching
            },
            StreamEvent::Token {
                text: " Hola".to_string()
            },
            StreamEvent::Token {
                text: " mundo".to_string()
            },
            StreamEvent::Done {
                session_id: Some("abc".to_string())
            },
        ]
    );
}

#[tokio::test]
async fn test_events_skip_malformed_and_unknown() {
    let client = MockHttpConfig::new()
        .with_stream_chunks(&["event: status\ndata: {\nevent: x\ndata: y\nevent: done\ndata: basura\n"])
        .build_client();

    let events: Vec<_> = client
        .events(&request("q"))
        .await
        .unwrap()
        .collect()
        .await;

    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        Ok(StreamEvent::Done { session_id: None })
    ));
}

#[tokio::test]
async fn test_events_open_failure_is_returned() {
    let client = MockHttpConfig::new()
        .with_stream_status(500, "Internal Server Error")
        .build_client();

    let result = client.events(&request("q")).await;
    assert!(matches!(result, Err(ClientError::Network(_))));
}

#[tokio::test]
async fn test_events_end_without_done() {
    let client = MockHttpConfig::new()
        .with_stream_chunks(&["event: token\ndata: a\n\nevent: token\ndata: cortado"])
        .build_client();

    let events: Vec<_> = client
        .events(&request("q"))
        .await
        .unwrap()
        .collect()
        .await;

    assert_eq!(events.len(), 1);
}
