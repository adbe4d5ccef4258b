//! Running a turn and recording its outcome.

use tracing::{debug, warn};

use crate::review_log::ReviewRecord;
use crate::{ChunkCallback, ConsumeError, Message, ReviewBackend, ReviewRequest, TurnError};

use super::manager::Conversation;

/// Reject input with nothing but whitespace.
pub fn validate_input(input: &str) -> Result<(), TurnError> {
    if input.trim().is_empty() {
        return Err(TurnError::EmptyInput);
    }
    Ok(())
}

impl Conversation {
    /// Send `input` and return the assistant's reply.
    ///
    /// On success the (user, assistant) pair is appended together. On any
    /// error history is left untouched; see [`Conversation::record_failure`].
    pub async fn ask(
        &mut self,
        backend: &dyn ReviewBackend,
        input: &str,
        question: Option<&str>,
        on_chunk: Option<&ChunkCallback<'_>>,
    ) -> Result<String, TurnError> {
        validate_input(input)?;

        let request = ReviewRequest {
            payload: self.build_payload(input),
            language: self.settings.language,
            question: question.map(str::to_string),
        };

        debug!(
            conversation = %self.id.short(),
            window = request.payload.history_window.is_some(),
            "Starting turn"
        );

        let reply = backend.consume(&request, on_chunk).await?;

        self.history
            .append_turn(Message::user(input), Message::assistant(reply.clone()));
        self.reviews.record(ReviewRecord::new(
            self.settings.language,
            input,
            question,
            reply.clone(),
        ));
        Ok(reply)
    }

    /// Record a failed turn as the user's input plus a fallback reply.
    pub fn record_failure(&mut self, input: &str, error: &ConsumeError) {
        warn!(conversation = %self.id.short(), error = %error, "Turn failed");
        self.history.append_turn(
            Message::user(input),
            Message::assistant(error.fallback_message()),
        );
    }
}
