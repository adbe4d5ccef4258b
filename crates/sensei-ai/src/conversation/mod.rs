//! Conversation turn handling.
//!
//! A `Conversation` owns the history for one session and runs turns against
//! a [`crate::ReviewBackend`]. History is written only after a call returns,
//! so a failed or cancelled turn leaves it exactly as it was.

mod chat;
mod manager;

#[cfg(test)]
mod tests;

pub use chat::validate_input;
pub use manager::{Conversation, ConversationSettings};
