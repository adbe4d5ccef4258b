//! Conversation behaviour: context window and default review settings.

use serde::{Deserialize, Serialize};
use sensei_common::{Language, ReviewFocus};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConversationConfig {
    /// Number of prior messages sent as context with each turn (1-100).
    pub history_length: u32,
    /// Language tag used when none is chosen explicitly.
    pub default_language: Language,
    /// Optional specialised review focus appended to the instructions.
    pub focus: Option<ReviewFocus>,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            history_length: 5,
            default_language: Language::Python,
            focus: None,
        }
    }
}
