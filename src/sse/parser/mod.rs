//! SSE stream parsing logic
//!
//! Contains the stateful [`EventAssembler`] that pairs `event:` and `data:`
//! lines into events, as well as the core parsing functions.

mod narrative;
mod pipeline;

use crate::sse::events::{EventKind, SseLine, SseParseError, StreamEvent};

use narrative::{parse_narrative_replace_event, parse_token_event};
use pipeline::{parse_done_event, parse_recommendations_event, parse_status_event};

/// Strip the single structural space that may follow a field colon
fn strip_field_space(value: &str) -> &str {
    value.strip_prefix(' ').unwrap_or(value)
}

/// Parse a single SSE line into its component type.
///
/// Only one space after `data:` is structural. Anything beyond it belongs to
/// the payload: token fragments such as `" the"` carry their leading space
/// on purpose, so `data:  the` must yield `" the"`.
pub fn parse_sse_line(line: &str) -> SseLine {
    if line.is_empty() {
        return SseLine::Empty;
    }

    if let Some(stripped) = line.strip_prefix(':') {
        return SseLine::Comment(stripped.to_string());
    }

    if let Some(rest) = line.strip_prefix("event:") {
        return SseLine::Event(strip_field_space(rest).trim().to_string());
    }

    if let Some(rest) = line.strip_prefix("data:") {
        return SseLine::Data(strip_field_space(rest).to_string());
    }

    // Unknown line format - treat as comment
    SseLine::Comment(line.to_string())
}

/// Parse SSE event type and data into a typed [`StreamEvent`].
///
/// Returns `Ok(None)` for event names outside the known vocabulary so that
/// new producer events do not break older clients.
pub fn parse_sse_event(event_type: &str, data: &str) -> Result<Option<StreamEvent>, SseParseError> {
    let Some(kind) = EventKind::from_name(event_type) else {
        return Ok(None);
    };

    let event = match kind {
        EventKind::Status => parse_status_event(event_type, data)?,
        EventKind::Recommendations => parse_recommendations_event(event_type, data)?,
        EventKind::Token => parse_token_event(data),
        EventKind::NarrativeReplace => parse_narrative_replace_event(data),
        EventKind::Done => parse_done_event(data),
    };
    Ok(Some(event))
}

/// Stateful assembler that turns decoded lines into events.
///
/// Holds at most one pending event name. An `event:` line overwrites it;
/// a `data:` line consumes it (or the empty name if none was declared) and
/// produces an event immediately, without waiting for a blank line.
#[derive(Debug, Default)]
pub struct EventAssembler {
    /// Name declared by the most recent unconsumed `event:` line
    pending_event_type: Option<String>,
}

impl EventAssembler {
    /// Create a new assembler
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a line to the assembler, potentially returning a complete event
    ///
    /// Returns:
    /// - `Ok(Some(event))` - A `data:` line completed a known event
    /// - `Ok(None)` - Line was consumed, or the event name is unknown
    /// - `Err(error)` - A known event carried a malformed payload
    ///
    /// The pending event name is cleared by every `data:` line, whatever
    /// the outcome.
    pub fn feed_line(&mut self, line: &str) -> Result<Option<StreamEvent>, SseParseError> {
        match parse_sse_line(line) {
            SseLine::Event(event_type) => {
                self.pending_event_type = Some(event_type);
                Ok(None)
            }
            SseLine::Data(data) => {
                let event_type = self.pending_event_type.take().unwrap_or_default();
                if EventKind::from_name(&event_type).is_none() {
                    tracing::debug!(event_type = %event_type, "ignoring unknown event");
                }
                parse_sse_event(&event_type, &data)
            }
            SseLine::Empty | SseLine::Comment(_) => Ok(None),
        }
    }

    /// Event name waiting for its `data:` line, if any
    pub fn pending_event_type(&self) -> Option<&str> {
        self.pending_event_type.as_deref()
    }
}
