//! cinematch - streaming client for a conversational film recommendation API
//!
//! The core is the incremental event-stream consumer: response bytes are
//! decoded into lines ([`sse::LineDecoder`]), lines into typed events
//! ([`sse::EventAssembler`]), and events are routed to a
//! [`traits::StreamHandler`] ([`dispatch::Dispatcher`]) as they arrive.
//! [`client::RecommendClient`] ties this to an HTTP transport.

pub mod adapters;
pub mod cancel;
pub mod cli;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod session;
pub mod sse;
pub mod traits;
pub mod transcript;

pub use cancel::{cancel_pair, CancelHandle, CancelSignal};
pub use client::{EventStream, RecommendClient};
pub use config::ClientConfig;
pub use dispatch::StreamOutcome;
pub use error::{ClientError, ClientResult};
pub use traits::StreamHandler;
pub use transcript::Transcript;
