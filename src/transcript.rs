//! Accumulated view of one recommendation stream.

use crate::error::ClientError;
use crate::models::{PipelinePhase, Recommendation};
use crate::traits::StreamHandler;

/// Everything a stream has reported so far.
///
/// Tokens are appended verbatim, `narrative_replace` swaps the whole
/// narrative, and each result list replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    pub phase: Option<PipelinePhase>,
    pub narrative: String,
    pub recommendations: Vec<Recommendation>,
    /// Set once the stream completes
    pub session_id: Option<String>,
    /// Set if the stream failed
    pub error: Option<String>,
    /// Number of times the narrative was rewritten
    pub rewrites: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        self.session_id.is_some()
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

impl StreamHandler for Transcript {
    fn on_phase(&mut self, phase: PipelinePhase) {
        self.phase = Some(phase);
    }

    fn on_recommendations(&mut self, items: Vec<Recommendation>) {
        self.recommendations = items;
    }

    fn on_token(&mut self, text: &str) {
        self.narrative.push_str(text);
    }

    fn on_narrative_replace(&mut self, text: &str) {
        self.narrative.clear();
        self.narrative.push_str(text);
        self.rewrites += 1;
    }

    fn on_done(&mut self, session_id: &str) {
        self.session_id = Some(session_id.to_string());
    }

    fn on_error(&mut self, error: &ClientError) {
        self.error = Some(error.to_string());
    }
}
