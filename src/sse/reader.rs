//! Chunk-to-event pipeline for a single stream.

use std::ops::ControlFlow;

use super::decoder::LineDecoder;
use super::events::StreamEvent;
use super::parser::EventAssembler;

/// Decoder and assembler state for exactly one response body.
///
/// Created when a stream opens and dropped when it ends; never shared
/// between streams.
#[derive(Debug, Default)]
pub struct EventReader {
    decoder: LineDecoder,
    assembler: EventAssembler,
}

impl EventReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `chunk` and hand every completed event to `on_event`, in wire
    /// order, before returning.
    ///
    /// Events with malformed structured payloads are dropped here and the
    /// stream carries on. If `on_event` breaks, the remaining lines of the
    /// chunk are discarded.
    pub fn feed_bytes<B, F>(&mut self, chunk: &[u8], on_event: F) -> ControlFlow<B>
    where
        F: FnMut(StreamEvent) -> ControlFlow<B>,
    {
        let lines = self.decoder.feed_bytes(chunk);
        self.process_lines(lines, on_event)
    }

    /// Same as [`feed_bytes`](Self::feed_bytes) for already-decoded text.
    pub fn feed_str<B, F>(&mut self, chunk: &str, on_event: F) -> ControlFlow<B>
    where
        F: FnMut(StreamEvent) -> ControlFlow<B>,
    {
        let lines = self.decoder.feed(chunk);
        self.process_lines(lines, on_event)
    }

    fn process_lines<B, F>(&mut self, lines: Vec<String>, mut on_event: F) -> ControlFlow<B>
    where
        F: FnMut(StreamEvent) -> ControlFlow<B>,
    {
        for line in lines {
            tracing::trace!(line = %line, "sse line");
            match self.assembler.feed_line(&line) {
                Ok(Some(event)) => on_event(event)?,
                Ok(None) => {}
                Err(e) => tracing::debug!(error = %e, "dropping malformed event"),
            }
        }
        ControlFlow::Continue(())
    }

    /// End of body: drop any unterminated trailing line.
    pub fn finish(self) {
        if let Some(tail) = self.decoder.finish() {
            tracing::debug!(bytes = tail.len(), "discarding incomplete trailing line");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(chunks: &[&[u8]]) -> Vec<StreamEvent> {
        let mut reader = EventReader::new();
        let mut events = Vec::new();
        for chunk in chunks {
            let _ = reader.feed_bytes(chunk, |event| {
                events.push(event);
                ControlFlow::<()>::Continue(())
            });
        }
        reader.finish();
        events
    }

    #[test]
    fn test_events_across_chunks() {
        let events = collect(&[b"event: tok", b"en\ndata:  Ho", b"la\n\n"]);
        assert_eq!(
            events,
            vec![StreamEvent::Token {
                text: " Hola".to_string()
            }]
        );
    }

    #[test]
    fn test_malformed_event_does_not_stop_following_events() {
        let events = collect(&[b"event: status\ndata: {oops\n\nevent: token\ndata: ok\n\n"]);
        assert_eq!(
            events,
            vec![StreamEvent::Token {
                text: "ok".to_string()
            }]
        );
    }

    #[test]
    fn test_incomplete_trailing_line_is_not_dispatched() {
        let events = collect(&[b"event: token\ndata: cortado"]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_break_discards_rest_of_chunk() {
        let mut reader = EventReader::new();
        let mut seen = Vec::new();
        let flow = reader.feed_str("event: token\ndata: a\nevent: token\ndata: b\n", |event| {
            seen.push(event);
            ControlFlow::Break("stop")
        });
        assert_eq!(flow, ControlFlow::Break("stop"));
        assert_eq!(seen.len(), 1);
    }
}
