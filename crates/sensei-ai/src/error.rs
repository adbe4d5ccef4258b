use std::time::Duration;

/// Why a streaming review call ended without a reply.
///
/// None of these are retried here; the caller decides what to show and
/// whether to record a fallback message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsumeError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("backend returned HTTP {0}")]
    BadStatus(u16),

    #[error("stream decode error: {0}")]
    StreamDecodeError(String),
}

impl ConsumeError {
    /// Assistant-voice text recorded in history in place of a real reply.
    pub fn fallback_message(&self) -> String {
        match self {
            ConsumeError::ConnectionFailed(_) | ConsumeError::BadStatus(_) => {
                "I apologize, but I'm having trouble connecting to the backend service. \
                 Please make sure the backend is running."
                    .to_string()
            }
            ConsumeError::Timeout(_) => {
                "The review took too long and was cancelled. Please try again.".to_string()
            }
            ConsumeError::StreamDecodeError(_) => format!(
                "I encountered an error: {self}. Please check the backend connection."
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("Please enter some code to review")]
    EmptyInput,

    #[error(transparent)]
    Consume(#[from] ConsumeError),
}
