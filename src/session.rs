//! Per-stream session context.

use uuid::Uuid;

/// Identifiers that live for the whole of one stream.
///
/// The incoming session id is the one the caller sent with the request; it
/// stands in for the `done` payload's id when that payload omits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamSession {
    incoming_session_id: Option<String>,
    correlation_id: Uuid,
}

impl StreamSession {
    /// Start a session. An empty incoming id counts as absent.
    pub fn new(incoming_session_id: Option<&str>) -> Self {
        Self {
            incoming_session_id: incoming_session_id
                .filter(|id| !id.is_empty())
                .map(str::to_string),
            correlation_id: Uuid::new_v4(),
        }
    }

    pub fn incoming_session_id(&self) -> Option<&str> {
        self.incoming_session_id.as_deref()
    }

    /// Local id tying together the log lines of one stream.
    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    /// Effective session id for completion: the payload's id if non-empty,
    /// else the incoming id, else `""`.
    pub fn resolve_session_id(&self, payload_session_id: Option<&str>) -> String {
        payload_session_id
            .filter(|id| !id.is_empty())
            .or(self.incoming_session_id.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

impl Default for StreamSession {
    fn default() -> Self {
        Self::new(None)
    }
}
