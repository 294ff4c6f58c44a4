//! SSE (Server-Sent Events) stream parser
//!
//! Parses the event stream produced by `POST /api/recommend/stream`.
//! SSE format consists of:
//! - `event: <type>` - event type line
//! - `data: <payload>` - data payload line
//! - Empty line - conventional end of event
//! - Lines starting with `:` - comments (ignored)
//!
//! # Module structure
//! - `decoder` - Chunk-to-line decoding (LineDecoder)
//! - `events` - Line and event type definitions (SseLine, EventKind, StreamEvent)
//! - `payloads` - Internal payload deserialization structs
//! - `parser` - Parsing logic (EventAssembler, parse_sse_line, parse_sse_event)
//! - `reader` - Decoder and assembler combined for one response body

mod decoder;
mod events;
mod parser;
mod payloads;
mod reader;

// Re-export public types
pub use decoder::LineDecoder;
pub use events::{EventKind, SseLine, SseParseError, StreamEvent};
pub use parser::{parse_sse_event, parse_sse_line, EventAssembler};
pub use reader::EventReader;
