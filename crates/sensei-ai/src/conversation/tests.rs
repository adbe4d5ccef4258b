//! Turn-level tests with a scripted backend.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use sensei_common::{Language, ReviewFocus};

use super::*;
use crate::{ChunkCallback, ConsumeError, Message, ReviewBackend, ReviewRequest, Role, TurnError};

/// Replies from a fixed script and remembers every request it saw.
struct ScriptedBackend {
    replies: Mutex<Vec<Result<String, ConsumeError>>>,
    seen: Mutex<Vec<ReviewRequest>>,
}

impl ScriptedBackend {
    fn new(replies: Vec<Result<String, ConsumeError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().rev().collect()),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn last_request(&self) -> ReviewRequest {
        self.seen.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl ReviewBackend for ScriptedBackend {
    async fn consume(
        &self,
        request: &ReviewRequest,
        on_chunk: Option<&ChunkCallback<'_>>,
    ) -> Result<String, ConsumeError> {
        self.seen.lock().unwrap().push(request.clone());
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop()
            .expect("script exhausted");
        if let (Ok(text), Some(cb)) = (&reply, on_chunk) {
            cb(text);
        }
        reply
    }
}

fn seeded(pairs: &[(&str, &str)]) -> Conversation {
    let mut conv = Conversation::default();
    for (q, a) in pairs {
        conv.history
            .append_turn(Message::user(*q), Message::assistant(*a));
    }
    conv
}

#[tokio::test]
async fn successful_turn_appends_pair() {
    let backend = ScriptedBackend::new(vec![Ok("Nice recursion!".into())]);
    let mut conv = Conversation::default();

    let reply = conv
        .ask(&backend, "def f(n): return f(n-1)", None, None)
        .await
        .unwrap();

    assert_eq!(reply, "Nice recursion!");
    let msgs = conv.history().messages();
    assert_eq!(msgs.len(), 2);
    assert_eq!(msgs[0].role, Role::User);
    assert_eq!(msgs[0].content, "def f(n): return f(n-1)");
    assert_eq!(msgs[1].role, Role::Assistant);
    assert_eq!(msgs[1].content, "Nice recursion!");
    assert_eq!(conv.reviews().len(), 1);
}

#[tokio::test]
async fn first_turn_has_no_window() {
    let backend = ScriptedBackend::new(vec![Ok("ok".into())]);
    let mut conv = Conversation::default();

    conv.ask(&backend, "hello", None, None).await.unwrap();

    let payload = backend.last_request().payload;
    assert_eq!(payload.history_window, None);
    assert!(!payload.render().contains("<recent_messages>"));
}

#[tokio::test]
async fn end_to_end_prompt_layout() {
    let backend = ScriptedBackend::new(vec![Ok("f".into())]);
    let mut conv = seeded(&[("a", "b"), ("c", "d")]);

    conv.ask(&backend, "e", None, None).await.unwrap();

    let prompt = backend.last_request().payload.render();
    let instructions = prompt.find("<instructions>").unwrap();
    let window = prompt.find("<recent_messages>").unwrap();
    let question = prompt.find("<question>").unwrap();
    assert!(instructions < window && window < question);

    assert!(prompt.contains(
        "<recent_messages>\n[user]: a\n[assistant]: b\n[user]: c\n[assistant]: d\n</recent_messages>"
    ));
    assert!(prompt.ends_with("<question>\ne\n</question>"));
}

#[tokio::test]
async fn window_is_bounded_by_history_length() {
    let backend = ScriptedBackend::new(vec![Ok("z".into())]);
    let mut conv = seeded(&[("q1", "a1"), ("q2", "a2"), ("q3", "a3")]);

    conv.ask(&backend, "next", None, None).await.unwrap();

    let window = backend.last_request().payload.history_window.unwrap();
    assert_eq!(
        window,
        "[assistant]: a1\n[user]: q2\n[assistant]: a2\n[user]: q3\n[assistant]: a3"
    );
}

#[tokio::test]
async fn failed_turn_leaves_history_unchanged() {
    let backend = ScriptedBackend::new(vec![Err(ConsumeError::Timeout(Duration::from_secs(60)))]);
    let mut conv = seeded(&[("a", "b")]);
    let before = conv.history().len();

    let err = conv.ask(&backend, "c", None, None).await.unwrap_err();

    assert!(matches!(err, TurnError::Consume(ConsumeError::Timeout(_))));
    assert_eq!(conv.history().len(), before);
    assert!(conv.reviews().is_empty());
}

#[tokio::test]
async fn record_failure_appends_fallback_pair() {
    let error = ConsumeError::BadStatus(502);
    let backend = ScriptedBackend::new(vec![Err(error.clone())]);
    let mut conv = Conversation::default();

    let err = conv.ask(&backend, "code", None, None).await.unwrap_err();
    let TurnError::Consume(consume) = err else {
        panic!("expected a consume error");
    };
    conv.record_failure("code", &consume);

    let msgs = conv.history().messages();
    assert_eq!(msgs.len(), 2);
    assert_eq!(msgs[0].content, "code");
    assert_eq!(msgs[1].content, error.fallback_message());
}

#[tokio::test]
async fn blank_input_is_rejected_without_calling_backend() {
    let backend = ScriptedBackend::new(vec![]);
    let mut conv = Conversation::default();

    let err = conv.ask(&backend, "   \n\t", None, None).await.unwrap_err();

    assert_eq!(err, TurnError::EmptyInput);
    assert!(backend.seen.lock().unwrap().is_empty());
    assert!(conv.history().is_empty());
}

#[tokio::test]
async fn request_carries_language_focus_and_question() {
    let backend = ScriptedBackend::new(vec![Ok("r".into())]);
    let mut conv = Conversation::default()
        .with_language(Language::Go)
        .with_focus(Some(ReviewFocus::Security));

    conv.ask(&backend, "package main", Some("is this safe?"), None)
        .await
        .unwrap();

    let request = backend.last_request();
    assert_eq!(request.language, Language::Go);
    assert_eq!(request.question.as_deref(), Some("is this safe?"));
    assert!(request.payload.instructions.contains("reviewing Go code"));
    assert!(request.payload.instructions.contains("security concerns"));
    assert_eq!(
        conv.reviews().records()[0].question.as_deref(),
        Some("is this safe?")
    );
}

#[tokio::test]
async fn chunks_reach_the_callback() {
    let backend = ScriptedBackend::new(vec![Ok("streamed".into())]);
    let mut conv = Conversation::default();
    let seen = Mutex::new(String::new());
    let cb = |f: &str| seen.lock().unwrap().push_str(f);

    conv.ask(&backend, "x", None, Some(&cb)).await.unwrap();

    assert_eq!(*seen.lock().unwrap(), "streamed");
}

#[tokio::test]
async fn conversation_usable_after_error() {
    let backend = ScriptedBackend::new(vec![
        Err(ConsumeError::ConnectionFailed("refused".into())),
        Ok("back online".into()),
    ]);
    let mut conv = Conversation::default();

    assert!(conv.ask(&backend, "one", None, None).await.is_err());
    let reply = conv.ask(&backend, "two", None, None).await.unwrap();

    assert_eq!(reply, "back online");
    assert_eq!(conv.history().len(), 2);
}

#[test]
fn restart_clears_history_and_reviews_but_keeps_id() {
    let mut conv = seeded(&[("a", "b")]);
    let id = conv.id().clone();

    conv.restart();

    assert!(conv.history().is_empty());
    assert!(conv.reviews().is_empty());
    assert_eq!(conv.id(), &id);
}

#[test]
fn settings_from_config_section() {
    let config = sensei_config::schema::ConversationConfig {
        history_length: 8,
        default_language: Language::Typescript,
        focus: Some(ReviewFocus::Beginner),
    };
    let settings = ConversationSettings::from(&config);
    assert_eq!(settings.history_length, 8);
    assert_eq!(settings.language, Language::Typescript);
    assert_eq!(settings.focus, Some(ReviewFocus::Beginner));
}

#[test]
fn validate_input_rejects_whitespace() {
    assert_eq!(validate_input(""), Err(TurnError::EmptyInput));
    assert!(validate_input(" x ").is_ok());
}
