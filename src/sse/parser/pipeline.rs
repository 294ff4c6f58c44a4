//! Parsers for the structured pipeline events

use crate::models::Recommendation;
use crate::sse::events::{SseParseError, StreamEvent};
use crate::sse::payloads::{DonePayload, StatusPayload};

/// Parse status event
pub(super) fn parse_status_event(event_type: &str, data: &str) -> Result<StreamEvent, SseParseError> {
    let payload: StatusPayload =
        serde_json::from_str(data).map_err(|e| SseParseError::InvalidJson {
            event_type: event_type.to_string(),
            source: e.to_string(),
        })?;
    Ok(StreamEvent::Status {
        phase: payload.phase,
    })
}

/// Parse recommendations event
pub(super) fn parse_recommendations_event(
    event_type: &str,
    data: &str,
) -> Result<StreamEvent, SseParseError> {
    let items: Vec<Recommendation> =
        serde_json::from_str(data).map_err(|e| SseParseError::InvalidJson {
            event_type: event_type.to_string(),
            source: e.to_string(),
        })?;
    Ok(StreamEvent::Recommendations { items })
}

/// Parse done event.
///
/// Completion must always be observable, so an unreadable payload still
/// yields `Done`, just without a session id.
pub(super) fn parse_done_event(data: &str) -> StreamEvent {
    let payload = match serde_json::from_str::<DonePayload>(data) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::debug!(error = %e, "done payload unreadable, falling back to known session");
            DonePayload::default()
        }
    };
    StreamEvent::Done {
        session_id: payload.session_id.filter(|id| !id.is_empty()),
    }
}
