//! Conversation struct and history access.

use sensei_common::{ConversationId, Language, ReviewFocus};
use sensei_config::schema::ConversationConfig;
use tracing::debug;

use crate::history::HistoryStore;
use crate::prompt::{catalog, render_window, RequestPayload};
use crate::review_log::ReviewLog;

/// Per-conversation knobs that shape each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSettings {
    /// Prior messages sent as context with each turn.
    pub history_length: usize,
    pub language: Language,
    pub focus: Option<ReviewFocus>,
}

impl Default for ConversationSettings {
    fn default() -> Self {
        Self {
            history_length: 5,
            language: Language::Python,
            focus: None,
        }
    }
}

impl From<&ConversationConfig> for ConversationSettings {
    fn from(config: &ConversationConfig) -> Self {
        Self {
            history_length: config.history_length as usize,
            language: config.default_language,
            focus: config.focus,
        }
    }
}

/// One user's conversation with the review backend.
pub struct Conversation {
    pub(super) id: ConversationId,
    pub(super) history: HistoryStore,
    pub(super) reviews: ReviewLog,
    pub(super) settings: ConversationSettings,
}

impl Conversation {
    pub fn new(settings: ConversationSettings) -> Self {
        Self {
            id: ConversationId::new(),
            history: HistoryStore::new(),
            reviews: ReviewLog::new(),
            settings,
        }
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.settings.language = language;
        self
    }

    pub fn with_focus(mut self, focus: Option<ReviewFocus>) -> Self {
        self.settings.focus = focus;
        self
    }

    pub fn set_language(&mut self, language: Language) {
        self.settings.language = language;
    }

    pub fn set_focus(&mut self, focus: Option<ReviewFocus>) {
        self.settings.focus = focus;
    }

    /// Build this turn's payload from the current window and `input`.
    pub fn build_payload(&self, input: &str) -> RequestPayload {
        let window = self.history.window(self.settings.history_length);
        let window_text = (!window.is_empty()).then(|| render_window(window));
        let instructions = catalog::instructions_for(self.settings.language, self.settings.focus);
        RequestPayload::new(instructions, window_text, input)
    }

    /// Forget every message and review. The conversation id is kept.
    pub fn restart(&mut self) {
        debug!(conversation = %self.id.short(), "Restarting conversation");
        self.history.clear();
        self.reviews.clear();
    }

    pub fn id(&self) -> &ConversationId {
        &self.id
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn reviews(&self) -> &ReviewLog {
        &self.reviews
    }

    pub fn settings(&self) -> &ConversationSettings {
        &self.settings
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(ConversationSettings::default())
    }
}
