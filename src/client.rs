//! Recommendation API client.
//!
//! Talks to the recommendation service over an [`HttpClient`]:
//! - `POST /api/recommend/stream` - streamed results and narration
//! - `POST /api/recommend` - the same, buffered into one response
//! - `GET /api/health` - service status

use std::collections::VecDeque;
use std::ops::ControlFlow;
use std::pin::Pin;

use futures::Stream;
use futures_util::StreamExt;
use tracing::Instrument;

use crate::adapters::ReqwestHttpClient;
use crate::cancel::CancelSignal;
use crate::config::ClientConfig;
use crate::dispatch::{StreamConsumer, StreamOutcome};
use crate::error::{ClientError, ClientResult, NetworkError};
use crate::models::{HealthStatus, RecommendRequest, RecommendResponse};
use crate::session::StreamSession;
use crate::sse::{EventReader, StreamEvent};
use crate::traits::{ByteStream, Headers, HttpClient, HttpError, StreamHandler};

const STREAM_PATH: &str = "/api/recommend/stream";
const RECOMMEND_PATH: &str = "/api/recommend";
const HEALTH_PATH: &str = "/api/health";

/// Finite, non-restartable sequence of decoded stream events.
pub type EventStream = Pin<Box<dyn Stream<Item = ClientResult<StreamEvent>> + Send>>;

/// Client for the recommendation API.
#[derive(Debug, Clone)]
pub struct RecommendClient<C = ReqwestHttpClient> {
    base_url: String,
    http: C,
}

impl RecommendClient<ReqwestHttpClient> {
    /// Create a client over reqwest from `config`.
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout())?;
        Ok(Self::with_http(&config.base_url, http))
    }
}

impl<C: HttpClient> RecommendClient<C> {
    /// Create a client over any transport.
    pub fn with_http(base_url: impl Into<String>, http: C) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Stream recommendations for `request` into `handler`.
    ///
    /// Every event is dispatched before the next chunk is awaited. Exactly
    /// one of `on_done` and `on_error` fires unless the body ends without
    /// `done` or `cancel` fires first, in which case neither does.
    pub async fn stream_recommendations<H>(
        &self,
        request: &RecommendRequest,
        handler: &mut H,
        cancel: CancelSignal,
    ) -> StreamOutcome
    where
        H: StreamHandler + ?Sized,
    {
        let session = StreamSession::new(request.session_id.as_deref());
        let span = tracing::info_span!(
            "recommend_stream",
            correlation_id = %session.correlation_id()
        );
        self.consume(request, StreamConsumer::new(handler, session), cancel)
            .instrument(span)
            .await
    }

    async fn consume<H: StreamHandler>(
        &self,
        request: &RecommendRequest,
        mut consumer: StreamConsumer<H>,
        mut cancel: CancelSignal,
    ) -> StreamOutcome {
        if let Err(e) = validate(request) {
            return consumer.fail(e);
        }

        tracing::info!(
            has_session = consumer.session().incoming_session_id().is_some(),
            "opening recommendation stream"
        );
        let opened = tokio::select! {
            biased;
            _ = cancel.cancelled() => return consumer.cancel(),
            opened = self.open_stream(request) => opened,
        };
        let mut body = match opened {
            Ok(body) => body,
            Err(e) => return consumer.fail(e),
        };

        loop {
            let next = tokio::select! {
                biased;
                _ = cancel.cancelled() => return consumer.cancel(),
                next = body.next() => next,
            };
            match next {
                Some(Ok(chunk)) => {
                    if let ControlFlow::Break(outcome) = consumer.feed(&chunk) {
                        tracing::info!("recommendation stream completed");
                        return outcome;
                    }
                }
                Some(Err(e)) => return consumer.fail(e.into()),
                None => return consumer.finish(),
            }
        }
    }

    async fn open_stream(&self, request: &RecommendRequest) -> ClientResult<ByteStream> {
        let url = self.url(STREAM_PATH);
        let body = serde_json::to_string(request)?;

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Accept".to_string(), "text/event-stream".to_string());

        self.http
            .post_stream(&url, &body, &headers)
            .await
            .map_err(|e| at_url(e, &url))
    }

    /// Pull-style alternative to
    /// [`stream_recommendations`](Self::stream_recommendations).
    ///
    /// Same order and payload rules. The `done` event carries the effective
    /// session id and ends the stream; a transport failure ends it after one
    /// `Err`. Dropping the stream cancels it.
    pub async fn events(&self, request: &RecommendRequest) -> ClientResult<EventStream> {
        validate(request)?;
        let session = StreamSession::new(request.session_id.as_deref());
        tracing::info!(correlation_id = %session.correlation_id(), "opening recommendation event stream");

        let body = self.open_stream(request).await?;
        let state = PullState {
            body,
            reader: EventReader::new(),
            pending: VecDeque::new(),
            session,
            finished: false,
        };

        Ok(Box::pin(futures::stream::unfold(state, pull_next)))
    }

    /// Buffered recommendation via `POST /api/recommend`.
    pub async fn recommend(&self, request: &RecommendRequest) -> ClientResult<RecommendResponse> {
        validate(request)?;
        let url = self.url(RECOMMEND_PATH);
        let body = serde_json::to_string(request)?;

        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let response = self
            .http
            .post(&url, &body, &headers)
            .await
            .map_err(|e| at_url(e, &url))?;
        if !response.is_success() {
            return Err(NetworkError::HttpStatus {
                status: response.status,
                message: response.text(),
            }
            .into());
        }
        Ok(response.json()?)
    }

    /// Service status via `GET /api/health`.
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        let url = self.url(HEALTH_PATH);
        let response = self
            .http
            .get(&url, &Headers::new())
            .await
            .map_err(|e| at_url(e, &url))?;
        if !response.is_success() {
            return Err(NetworkError::HttpStatus {
                status: response.status,
                message: response.text(),
            }
            .into());
        }
        Ok(response.json()?)
    }
}

fn validate(request: &RecommendRequest) -> ClientResult<()> {
    if request.has_query() {
        Ok(())
    } else {
        Err(ClientError::InvalidRequest {
            message: "Query must not be empty".to_string(),
        })
    }
}

/// Transport errors don't know the URL; attach it to connection failures.
fn at_url(err: HttpError, url: &str) -> ClientError {
    match err {
        HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
            url: url.to_string(),
            message,
        }
        .into(),
        other => other.into(),
    }
}

struct PullState {
    body: ByteStream,
    reader: EventReader,
    pending: VecDeque<StreamEvent>,
    session: StreamSession,
    finished: bool,
}

async fn pull_next(mut state: PullState) -> Option<(ClientResult<StreamEvent>, PullState)> {
    loop {
        if let Some(event) = state.pending.pop_front() {
            return Some((Ok(event), state));
        }
        if state.finished {
            state.reader.finish();
            return None;
        }

        match state.body.next().await {
            Some(Ok(chunk)) => {
                let PullState {
                    reader,
                    pending,
                    session,
                    finished,
                    ..
                } = &mut state;
                let _ = reader.feed_bytes(&chunk, |event| {
                    let event = match event {
                        StreamEvent::Done { session_id } => {
                            *finished = true;
                            let resolved = session.resolve_session_id(session_id.as_deref());
                            StreamEvent::Done {
                                session_id: Some(resolved).filter(|id| !id.is_empty()),
                            }
                        }
                        other => other,
                    };
                    pending.push_back(event);
                    if *finished {
                        ControlFlow::Break(())
                    } else {
                        ControlFlow::Continue(())
                    }
                });
            }
            Some(Err(e)) => {
                let err = ClientError::from(e);
                tracing::warn!(code = err.error_code(), error = %err, "event stream failed");
                state.finished = true;
                return Some((Err(err), state));
            }
            None => {
                state.reader.finish();
                return None;
            }
        }
    }
}
