//! Callback set for a streaming recommendation request.

use crate::error::ClientError;
use crate::models::{PipelinePhase, Recommendation};

/// Receives the events of one recommendation stream.
///
/// Callbacks run synchronously, in wire order, one at a time. A stream
/// invokes at most one of [`on_done`](Self::on_done) and
/// [`on_error`](Self::on_error), at most once. Every method defaults to a
/// no-op so callers implement only what they render.
///
/// # Example
///
/// ```ignore
/// use cinematch::traits::StreamHandler;
///
/// struct Printer;
///
/// impl StreamHandler for Printer {
///     fn on_token(&mut self, text: &str) {
///         print!("{}", text);
///     }
/// }
/// ```
pub trait StreamHandler: Send {
    /// The producer entered a new pipeline phase.
    fn on_phase(&mut self, _phase: PipelinePhase) {}

    /// Full current result list; replaces any earlier list.
    fn on_recommendations(&mut self, _items: Vec<Recommendation>) {}

    /// One narration fragment, to be appended exactly as given.
    fn on_token(&mut self, _text: &str) {}

    /// Narration accumulated so far must be replaced with `text`.
    fn on_narrative_replace(&mut self, _text: &str) {}

    /// The stream completed. `session_id` may be empty.
    fn on_done(&mut self, _session_id: &str) {}

    /// The stream failed at the transport level.
    fn on_error(&mut self, _error: &ClientError) {}
}

impl<H: StreamHandler + ?Sized> StreamHandler for &mut H {
    fn on_phase(&mut self, phase: PipelinePhase) {
        (**self).on_phase(phase)
    }

    fn on_recommendations(&mut self, items: Vec<Recommendation>) {
        (**self).on_recommendations(items)
    }

    fn on_token(&mut self, text: &str) {
        (**self).on_token(text)
    }

    fn on_narrative_replace(&mut self, text: &str) {
        (**self).on_narrative_replace(text)
    }

    fn on_done(&mut self, session_id: &str) {
        (**self).on_done(session_id)
    }

    fn on_error(&mut self, error: &ClientError) {
        (**self).on_error(error)
    }
}
