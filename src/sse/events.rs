//! SSE line and event type definitions
//!
//! Contains the line grammar (`SseLine`), the closed vocabulary of event
//! names the client understands (`EventKind`) and the typed events they
//! decode into (`StreamEvent`).

use std::fmt;

use crate::models::{PipelinePhase, Recommendation};

/// One decoded line of the event stream, classified by its prefix
#[derive(Debug, Clone, PartialEq)]
pub enum SseLine {
    /// Blank line (conventional event boundary)
    Empty,
    /// `:` comment or any line without a recognised field prefix
    Comment(String),
    /// `event:` line carrying the event name
    Event(String),
    /// `data:` line carrying the payload verbatim
    Data(String),
}

/// Event names this client dispatches. Anything else is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Status,
    Recommendations,
    Token,
    NarrativeReplace,
    Done,
}

impl EventKind {
    /// Look up a wire event name. Returns `None` for unknown names,
    /// including the empty name of a `data:` line with no preceding `event:`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "status" => Some(EventKind::Status),
            "recommendations" => Some(EventKind::Recommendations),
            "token" => Some(EventKind::Token),
            "narrative_replace" => Some(EventKind::NarrativeReplace),
            "done" => Some(EventKind::Done),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Status => "status",
            EventKind::Recommendations => "recommendations",
            EventKind::Token => "token",
            EventKind::NarrativeReplace => "narrative_replace",
            EventKind::Done => "done",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed events from the recommendation stream
#[derive(Debug, Clone, PartialEq)]
pub enum StreamEvent {
    /// Pipeline moved to a new phase
    Status { phase: PipelinePhase },
    /// Full current result list, replacing any earlier one
    Recommendations { items: Vec<Recommendation> },
    /// Narration fragment, to be appended exactly as received
    Token { text: String },
    /// Narration so far must be replaced with this text
    NarrativeReplace { text: String },
    /// Stream finished; `None` when the payload carried no usable session id
    Done { session_id: Option<String> },
}

impl StreamEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            StreamEvent::Status { .. } => EventKind::Status,
            StreamEvent::Recommendations { .. } => EventKind::Recommendations,
            StreamEvent::Token { .. } => EventKind::Token,
            StreamEvent::NarrativeReplace { .. } => EventKind::NarrativeReplace,
            StreamEvent::Done { .. } => EventKind::Done,
        }
    }
}

/// Error decoding the payload of a known event
#[derive(Debug, Clone, PartialEq)]
pub enum SseParseError {
    /// Structured payload was not valid JSON of the expected shape
    InvalidJson { event_type: String, source: String },
}

impl fmt::Display for SseParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SseParseError::InvalidJson { event_type, source } => {
                write!(f, "Invalid JSON for event '{}': {}", event_type, source)
            }
        }
    }
}

impl std::error::Error for SseParseError {}
