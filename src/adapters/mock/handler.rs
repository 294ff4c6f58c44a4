//! Recording stream handler for testing.

use crate::error::ClientError;
use crate::models::{PipelinePhase, Recommendation};
use crate::traits::StreamHandler;

/// One callback invocation, as observed by [`RecordingHandler`].
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerCall {
    Phase(PipelinePhase),
    Recommendations(Vec<Recommendation>),
    Token(String),
    NarrativeReplace(String),
    Done(String),
    /// Failure, recorded by its display text
    Error(String),
}

/// Handler that records every callback in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingHandler {
    calls: Vec<HandlerCall>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[HandlerCall] {
        &self.calls
    }

    /// Concatenation of every token, in arrival order.
    pub fn tokens(&self) -> String {
        self.calls
            .iter()
            .filter_map(|call| match call {
                HandlerCall::Token(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn done_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, HandlerCall::Done(_)))
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, HandlerCall::Error(_)))
            .count()
    }
}

impl StreamHandler for RecordingHandler {
    fn on_phase(&mut self, phase: PipelinePhase) {
        self.calls.push(HandlerCall::Phase(phase));
    }

    fn on_recommendations(&mut self, items: Vec<Recommendation>) {
        self.calls.push(HandlerCall::Recommendations(items));
    }

    fn on_token(&mut self, text: &str) {
        self.calls.push(HandlerCall::Token(text.to_string()));
    }

    fn on_narrative_replace(&mut self, text: &str) {
        self.calls.push(HandlerCall::NarrativeReplace(text.to_string()));
    }

    fn on_done(&mut self, session_id: &str) {
        self.calls.push(HandlerCall::Done(session_id.to_string()));
    }

    fn on_error(&mut self, error: &ClientError) {
        self.calls.push(HandlerCall::Error(error.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut handler = RecordingHandler::new();
        handler.on_token(" Hola");
        handler.on_phase(PipelinePhase::Narrating);
        handler.on_token(" mundo");
        handler.on_done("abc");

        assert_eq!(handler.calls().len(), 4);
        assert_eq!(handler.tokens(), " Hola mundo");
        assert_eq!(handler.done_count(), 1);
        assert_eq!(handler.error_count(), 0);
    }
}
