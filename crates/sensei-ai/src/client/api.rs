//! ReviewBackend implementation over HTTP with SSE streaming.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use sensei_common::Language;
use serde::Serialize;
use tracing::{debug, warn};

use crate::streaming::{decode_stream, Completion};
use crate::{ChunkCallback, ConsumeError, ReviewBackend, ReviewRequest};

use super::config::ReviewClientConfig;

const EVENT_STREAM: &str = "text/event-stream";

/// Wire body of `POST /api/review`.
#[derive(Debug, Serialize)]
struct ReviewBody<'a> {
    /// The assembled prompt.
    code: String,
    language: Language,
    question: Option<&'a str>,
}

impl<'a> From<&'a ReviewRequest> for ReviewBody<'a> {
    fn from(request: &'a ReviewRequest) -> Self {
        Self {
            code: request.payload.render(),
            language: request.language,
            question: request.question.as_deref(),
        }
    }
}

/// Review backend client.
pub struct ReviewClient {
    pub(crate) config: ReviewClientConfig,
    pub(crate) http: reqwest::Client,
}

impl ReviewClient {
    pub fn new(config: ReviewClientConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ReviewClientConfig {
        &self.config
    }

    /// Send one request and decode its streamed reply.
    ///
    /// Partial text is dropped on any failure, including the timeout.
    pub async fn consume(
        &self,
        request: &ReviewRequest,
        on_chunk: Option<&ChunkCallback<'_>>,
    ) -> Result<String, ConsumeError> {
        let bound = self.config.timeout;
        match tokio::time::timeout(bound, self.send_and_decode(request, on_chunk)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(endpoint = %self.config.endpoint, ?bound, "review request timed out");
                Err(ConsumeError::Timeout(bound))
            }
        }
    }

    async fn send_and_decode(
        &self,
        request: &ReviewRequest,
        on_chunk: Option<&ChunkCallback<'_>>,
    ) -> Result<String, ConsumeError> {
        let body = ReviewBody::from(request);

        debug!(
            endpoint = %self.config.endpoint,
            language = %request.language,
            prompt_chars = body.code.len(),
            "review request"
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .header(ACCEPT, EVENT_STREAM)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.send_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            // The body of a failed response is never decoded.
            return Err(ConsumeError::BadStatus(status.as_u16()));
        }

        // A missing content type is left to the decoder to judge.
        if let Some(content_type) = response.headers().get(CONTENT_TYPE) {
            let content_type = content_type.to_str().unwrap_or_default();
            if !is_event_stream(content_type) {
                return Err(ConsumeError::StreamDecodeError(format!(
                    "expected {EVENT_STREAM}, got content type {content_type:?}"
                )));
            }
        }

        let outcome = decode_stream(response.bytes_stream(), on_chunk).await?;
        if outcome.completion == Completion::StreamClosed {
            warn!("review stream closed without [DONE]; keeping accumulated text");
        }
        Ok(outcome.text)
    }

    fn send_error(&self, e: reqwest::Error) -> ConsumeError {
        if e.is_timeout() {
            ConsumeError::Timeout(self.config.timeout)
        } else {
            ConsumeError::ConnectionFailed(e.to_string())
        }
    }
}

/// `text/event-stream`, ignoring parameters such as `charset`.
fn is_event_stream(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(EVENT_STREAM))
}

#[async_trait]
impl ReviewBackend for ReviewClient {
    async fn consume(
        &self,
        request: &ReviewRequest,
        on_chunk: Option<&ChunkCallback<'_>>,
    ) -> Result<String, ConsumeError> {
        ReviewClient::consume(self, request, on_chunk).await
    }
}
