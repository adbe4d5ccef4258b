//! Conversation engine for sensei.
//!
//! Provides the pieces of one code-review turn:
//! - An append-only history store with a bounded context window
//! - A pure prompt assembler plus the instruction template catalog
//! - A streaming (SSE) response consumer for the review backend
//! - The turn step that ties them together and records results
//! - An in-memory log of completed reviews

pub mod client;
pub mod conversation;
pub mod error;
pub mod history;
pub mod prompt;
pub mod review_log;
pub mod streaming;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sensei_common::Language;

pub use client::{ReviewClient, ReviewClientConfig};
pub use conversation::{Conversation, ConversationSettings};
pub use error::{ConsumeError, TurnError};
pub use history::HistoryStore;
pub use prompt::{assemble, RequestPayload};
pub use review_log::{ReviewLog, ReviewRecord, ReviewStats};
pub use streaming::{Completion, SseDecoder};

/// Callback receiving each decoded text fragment as it arrives.
pub type ChunkCallback<'a> = dyn Fn(&str) + Send + Sync + 'a;

/// Anything that can turn a review request into the assistant's reply.
///
/// `ReviewClient` is the HTTP implementation; tests substitute scripted ones.
#[async_trait]
pub trait ReviewBackend: Send + Sync {
    async fn consume(
        &self,
        request: &ReviewRequest,
        on_chunk: Option<&ChunkCallback<'_>>,
    ) -> Result<String, ConsumeError>;
}

/// One outbound review: the assembled payload plus the tags the backend
/// wants alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    pub payload: RequestPayload,
    pub language: Language,
    /// Optional question the user attached to the submitted code.
    pub question: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
