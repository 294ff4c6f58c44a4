//! Routing of decoded events to a [`StreamHandler`].
//!
//! [`Dispatcher`] is the fixed event-kind to callback table. It also owns
//! the session context so the terminal callback can fall back to the
//! caller's session id. [`StreamConsumer`] puts an [`EventReader`] in front
//! of it and is what the client drives chunk by chunk.

use std::ops::ControlFlow;

use crate::error::ClientError;
use crate::session::StreamSession;
use crate::sse::{EventReader, StreamEvent};
use crate::traits::StreamHandler;

/// How a stream invocation ended.
#[derive(Debug)]
pub enum StreamOutcome {
    /// `done` arrived; carries the effective session id (possibly empty).
    Completed { session_id: String },
    /// Transport failure, already reported to the handler.
    Failed(ClientError),
    /// Body closed without a `done` event.
    Ended,
    /// The caller cancelled; no terminal callback fired.
    Cancelled,
}

impl StreamOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, StreamOutcome::Completed { .. })
    }

    pub fn session_id(&self) -> Option<&str> {
        match self {
            StreamOutcome::Completed { session_id } => Some(session_id),
            _ => None,
        }
    }
}

/// Invokes the handler callback matching each event.
///
/// Latches once `done` has been dispatched: later events and failures are
/// ignored, so the handler sees at most one of `on_done` and `on_error`.
pub struct Dispatcher<H> {
    handler: H,
    session: StreamSession,
    completed: Option<String>,
    failed: bool,
}

impl<H: StreamHandler> Dispatcher<H> {
    pub fn new(handler: H, session: StreamSession) -> Self {
        Self {
            handler,
            session,
            completed: None,
            failed: false,
        }
    }

    pub fn session(&self) -> &StreamSession {
        &self.session
    }

    pub fn is_finished(&self) -> bool {
        self.completed.is_some() || self.failed
    }

    /// Dispatch one event. Breaks with the effective session id once the
    /// stream has completed.
    pub fn dispatch(&mut self, event: StreamEvent) -> ControlFlow<String> {
        if let Some(session_id) = &self.completed {
            tracing::debug!(kind = %event.kind(), "ignoring event after done");
            return ControlFlow::Break(session_id.clone());
        }
        if self.failed {
            tracing::debug!(kind = %event.kind(), "ignoring event after failure");
            return ControlFlow::Continue(());
        }

        tracing::debug!(kind = %event.kind(), "dispatching event");
        match event {
            StreamEvent::Status { phase } => self.handler.on_phase(phase),
            StreamEvent::Recommendations { items } => self.handler.on_recommendations(items),
            StreamEvent::Token { text } => self.handler.on_token(&text),
            StreamEvent::NarrativeReplace { text } => self.handler.on_narrative_replace(&text),
            StreamEvent::Done { session_id } => {
                let resolved = self.session.resolve_session_id(session_id.as_deref());
                self.handler.on_done(&resolved);
                self.completed = Some(resolved.clone());
                return ControlFlow::Break(resolved);
            }
        }
        ControlFlow::Continue(())
    }

    /// Report a transport failure, unless the stream already finished.
    pub fn fail(&mut self, error: ClientError) -> StreamOutcome {
        if let Some(session_id) = &self.completed {
            tracing::debug!(error = %error, "failure after done ignored");
            return StreamOutcome::Completed {
                session_id: session_id.clone(),
            };
        }
        if !self.failed {
            tracing::warn!(code = error.error_code(), error = %error, "stream failed");
            self.failed = true;
            self.handler.on_error(&error);
        }
        StreamOutcome::Failed(error)
    }
}

/// Per-stream decoding and dispatch state, created at stream start and
/// dropped at stream end.
pub struct StreamConsumer<H> {
    reader: EventReader,
    dispatcher: Dispatcher<H>,
}

impl<H: StreamHandler> StreamConsumer<H> {
    pub fn new(handler: H, session: StreamSession) -> Self {
        Self {
            reader: EventReader::new(),
            dispatcher: Dispatcher::new(handler, session),
        }
    }

    pub fn session(&self) -> &StreamSession {
        self.dispatcher.session()
    }

    /// Decode one chunk and dispatch every event it completes. Breaks when
    /// `done` is dispatched; the rest of the chunk is discarded.
    pub fn feed(&mut self, chunk: &[u8]) -> ControlFlow<StreamOutcome> {
        let dispatcher = &mut self.dispatcher;
        match self.reader.feed_bytes(chunk, |event| dispatcher.dispatch(event)) {
            ControlFlow::Continue(()) => ControlFlow::Continue(()),
            ControlFlow::Break(session_id) => {
                ControlFlow::Break(StreamOutcome::Completed { session_id })
            }
        }
    }

    /// Transport failed; report it once and end the stream.
    pub fn fail(mut self, error: ClientError) -> StreamOutcome {
        let outcome = self.dispatcher.fail(error);
        self.reader.finish();
        outcome
    }

    /// Caller cancelled; no callback fires.
    pub fn cancel(self) -> StreamOutcome {
        tracing::info!("stream cancelled");
        self.reader.finish();
        StreamOutcome::Cancelled
    }

    /// Body ended without `done`. Any partial trailing line is discarded.
    pub fn finish(self) -> StreamOutcome {
        tracing::info!("stream ended without done");
        self.reader.finish();
        StreamOutcome::Ended
    }
}
