//! Server-Sent Events (SSE) stream decoding.
//!
//! The review backend streams its reply as `data: <fragment>` lines and ends
//! with `data: [DONE]`. Network chunk boundaries are unrelated to line
//! boundaries, so bytes are buffered until a full line is available; a line
//! (or a multi-byte character) may be split over any number of reads.

use futures_util::{Stream, StreamExt};
use tracing::debug;

use crate::{ChunkCallback, ConsumeError};

const DATA_PREFIX: &str = "data: ";
const DONE_SENTINEL: &str = "[DONE]";

/// How a successfully decoded stream ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The `[DONE]` sentinel arrived.
    Sentinel,
    /// The connection closed cleanly without a sentinel.
    StreamClosed,
}

/// Final text of a decoded stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamOutcome {
    pub text: String,
    pub completion: Completion,
}

/// Incremental decoder for one response body.
///
/// Owns the response accumulator; it is consumed by [`SseDecoder::finish`],
/// so partial text never outlives a failed call.
#[derive(Debug, Default)]
pub struct SseDecoder {
    /// Bytes of the current, not yet terminated line.
    pending: Vec<u8>,
    /// Prefix of `pending` already known to hold no newline.
    scanned: usize,
    accumulated: String,
    done: bool,
    events: usize,
    /// Non-blank lines that are neither `data: ` events nor comments.
    unframed: usize,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one network chunk. Returns the fragments completed by it, in
    /// arrival order. Input after the sentinel is ignored.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<String>, ConsumeError> {
        let mut fragments = Vec::new();
        if self.done {
            return Ok(fragments);
        }

        self.pending.extend_from_slice(chunk);

        let mut consumed = 0;
        let mut search_from = self.scanned;
        while let Some(offset) = self.pending[search_from..].iter().position(|&b| b == b'\n') {
            let end = search_from + offset;
            let line = decode_line(&self.pending[consumed..end])?;
            consumed = end + 1;
            search_from = consumed;

            if let Some(fragment) = self.handle_line(&line) {
                fragments.push(fragment);
            }
            if self.done {
                break;
            }
        }
        self.pending.drain(..consumed);
        if self.done {
            self.pending.clear();
        }
        self.scanned = self.pending.len();

        Ok(fragments)
    }

    /// Whether the sentinel has been seen.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Number of `data:` events decoded so far, sentinel included.
    pub fn event_count(&self) -> usize {
        self.events
    }

    /// Close the stream: an unterminated trailing line is decoded as if
    /// it had ended with a newline.
    ///
    /// A body with content but not a single `data: ` event is not an event
    /// stream and is rejected.
    pub fn finish(mut self) -> Result<(StreamOutcome, Option<String>), ConsumeError> {
        let mut last = None;
        if !self.done && !self.pending.is_empty() {
            let tail = std::mem::take(&mut self.pending);
            let line = decode_line(&tail)?;
            last = self.handle_line(&line);
        }

        if self.events == 0 && self.unframed > 0 {
            return Err(ConsumeError::StreamDecodeError(format!(
                "response is not an event stream ({} unframed line(s), no data events)",
                self.unframed
            )));
        }

        let completion = if self.done {
            Completion::Sentinel
        } else {
            Completion::StreamClosed
        };
        Ok((
            StreamOutcome {
                text: self.accumulated,
                completion,
            },
            last,
        ))
    }

    fn handle_line(&mut self, line: &str) -> Option<String> {
        // Blank lines, comments and other SSE fields carry no content.
        let Some(payload) = line.strip_prefix(DATA_PREFIX) else {
            if !line.trim().is_empty() && !line.starts_with(':') {
                self.unframed += 1;
            }
            return None;
        };
        self.events += 1;

        if payload == DONE_SENTINEL {
            self.done = true;
            return None;
        }
        if payload.is_empty() {
            return None;
        }

        self.accumulated.push_str(payload);
        Some(payload.to_string())
    }
}

fn decode_line(bytes: &[u8]) -> Result<String, ConsumeError> {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8(bytes.to_vec())
        .map_err(|e| ConsumeError::StreamDecodeError(format!("line is not valid UTF-8: {e}")))
}

/// Drain a byte stream through an [`SseDecoder`], forwarding each fragment
/// to `on_chunk` as it is decoded.
///
/// Stops reading at the sentinel. A transport error while reading the body
/// is reported as [`ConsumeError::StreamDecodeError`].
pub async fn decode_stream<S, B, E>(
    mut stream: S,
    on_chunk: Option<&ChunkCallback<'_>>,
) -> Result<StreamOutcome, ConsumeError>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
    E: std::fmt::Display,
{
    let mut decoder = SseDecoder::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| {
            ConsumeError::StreamDecodeError(format!("failed to read response body: {e}"))
        })?;

        for fragment in decoder.feed(chunk.as_ref())? {
            if let Some(cb) = on_chunk {
                cb(&fragment);
            }
        }
        if decoder.is_done() {
            break;
        }
    }

    let events = decoder.event_count();
    let (outcome, last) = decoder.finish()?;
    if let (Some(fragment), Some(cb)) = (last, on_chunk) {
        cb(&fragment);
    }

    debug!(
        events,
        chars = outcome.text.len(),
        completion = ?outcome.completion,
        "SSE stream decoded"
    );
    Ok(outcome)
}
