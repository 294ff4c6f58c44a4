//! Internal payload deserialization structs

use serde::Deserialize;

use crate::models::PipelinePhase;

/// Payload for status events
#[derive(Debug, Deserialize)]
pub(crate) struct StatusPayload {
    pub phase: PipelinePhase,
}

/// Payload for done events
#[derive(Debug, Default, Deserialize)]
pub(crate) struct DonePayload {
    #[serde(default)]
    pub session_id: Option<String>,
}
