//! Conversation history.
//!
//! The full log is kept for display; only a short suffix (the window) is
//! sent to the backend with each turn.

use crate::Message;

/// Ordered, append-only log of messages for one conversation.
///
/// Order is turn order. Nothing is reordered or removed except by
/// [`HistoryStore::clear`].
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    messages: Vec<Message>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Append a user message and its reply as one step.
    pub fn append_turn(&mut self, user: Message, assistant: Message) {
        self.messages.reserve(2);
        self.messages.push(user);
        self.messages.push(assistant);
    }

    /// The most recent `min(limit, len)` messages, oldest first.
    ///
    /// Empty until at least one full exchange exists (fewer than two
    /// messages), and empty for `limit == 0`.
    pub fn window(&self, limit: usize) -> &[Message] {
        if self.messages.len() < 2 || limit == 0 {
            return &[];
        }
        let start = self.messages.len().saturating_sub(limit);
        &self.messages[start..]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Drop every message. Used on explicit restart.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    fn store_with(n: usize) -> HistoryStore {
        let mut store = HistoryStore::new();
        for i in 0..n {
            let msg = if i % 2 == 0 {
                Message::user(format!("m{i}"))
            } else {
                Message::assistant(format!("m{i}"))
            };
            store.append(msg);
        }
        store
    }

    fn contents(msgs: &[Message]) -> Vec<&str> {
        msgs.iter().map(|m| m.content.as_str()).collect()
    }

    #[test]
    fn window_returns_min_of_limit_and_len() {
        for n in 2..8 {
            let store = store_with(n);
            for k in 1..10 {
                assert_eq!(store.window(k).len(), k.min(n), "n={n} k={k}");
            }
        }
    }

    #[test]
    fn window_keeps_chronological_order() {
        let store = store_with(6);
        assert_eq!(contents(store.window(3)), vec!["m3", "m4", "m5"]);
        assert_eq!(
            contents(store.window(10)),
            vec!["m0", "m1", "m2", "m3", "m4", "m5"]
        );
    }

    #[test]
    fn window_empty_below_one_exchange() {
        assert!(store_with(0).window(5).is_empty());
        assert!(store_with(1).window(5).is_empty());
        assert_eq!(store_with(2).window(5).len(), 2);
    }

    #[test]
    fn window_with_zero_limit_is_empty() {
        assert!(store_with(4).window(0).is_empty());
    }

    #[test]
    fn window_does_not_mutate() {
        let store = store_with(5);
        let _ = store.window(2);
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn append_turn_adds_pair_in_order() {
        let mut store = HistoryStore::new();
        store.append_turn(Message::user("q"), Message::assistant("a"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.messages()[0].role, Role::User);
        assert_eq!(store.messages()[1].role, Role::Assistant);
    }

    #[test]
    fn clear_empties_store() {
        let mut store = store_with(4);
        store.clear();
        assert!(store.is_empty());
        assert!(store.window(5).is_empty());
    }
}
