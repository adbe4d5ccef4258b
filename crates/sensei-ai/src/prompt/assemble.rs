//! Tagged-section prompt assembly.

use crate::Message;

const INSTRUCTIONS_TAG: &str = "instructions";
const WINDOW_TAG: &str = "recent_messages";
const QUESTION_TAG: &str = "question";

/// The outbound unit for one turn, built fresh and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPayload {
    pub instructions: String,
    pub history_window: Option<String>,
    pub question: String,
}

impl RequestPayload {
    pub fn new(
        instructions: impl Into<String>,
        history_window: Option<String>,
        question: impl Into<String>,
    ) -> Self {
        Self {
            instructions: instructions.into(),
            history_window,
            question: question.into(),
        }
    }

    pub fn render(&self) -> String {
        assemble(
            &self.instructions,
            self.history_window.as_deref(),
            &self.question,
        )
    }
}

/// Render instructions, optional recent window and the question as
/// tagged sections, in that order.
///
/// The window section is left out entirely when absent or empty.
pub fn assemble(instructions: &str, window: Option<&str>, question: &str) -> String {
    let mut parts = Vec::with_capacity(3);
    parts.push(section(INSTRUCTIONS_TAG, instructions));
    if let Some(window) = window.filter(|w| !w.is_empty()) {
        parts.push(section(WINDOW_TAG, window));
    }
    parts.push(section(QUESTION_TAG, question));
    parts.join("\n")
}

/// One line per message: `[role]: content`.
pub fn render_window(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|m| format!("[{}]: {}", m.role, m.content))
        .collect::<Vec<_>>()
        .join("\n")
}

fn section(tag: &str, body: &str) -> String {
    format!("<{tag}>\n{body}\n</{tag}>")
}
