//! Plain-text formatting for REPL output.

use std::fmt::Write;

use sensei_ai::prompt::catalog::SUGGESTIONS;
use sensei_ai::{ConversationSettings, Message, ReviewRecord, ReviewStats};

/// Longest code preview shown in review listings.
const PREVIEW_CHARS: usize = 60;

pub const HELP: &str = "\
Type or paste code and press Enter to send one line.
Lines starting with // or /* are sent as code.
  /code            start a multi-line block; finish with a line holding only '.'
  /ask <question>  attach a question to the next submission
  /lang <tag>      switch language (python, js, ts, java, cpp, go, rust)
  /focus [name]    set or clear the review focus
  /history         show the conversation so far
  /reviews [term] [--lang a,b]
                   search completed reviews, optionally by language
  /stats           review statistics
  /suggest         starter examples
  /restart         start a fresh conversation
  /quit            exit (Ctrl-C at the prompt also exits)
Ctrl-C while a review is streaming cancels that review.";

pub fn banner(settings: &ConversationSettings) -> String {
    let mut out = format!(
        "sensei v{} - language: {}",
        env!("CARGO_PKG_VERSION"),
        settings.language.display_name()
    );
    if let Some(focus) = settings.focus {
        let _ = write!(out, ", focus: {focus}");
    }
    out.push_str("\nType /help for commands.");
    out
}

pub fn suggestions() -> String {
    let mut out = String::from("Try one of these:");
    for (i, s) in SUGGESTIONS.iter().enumerate() {
        let _ = write!(out, "\n\n{}. {}\n{}", i + 1, s.label, s.text);
    }
    out
}

pub fn history(messages: &[Message]) -> String {
    if messages.is_empty() {
        return "No messages yet.".into();
    }
    messages
        .iter()
        .map(|m| format!("[{} {}]\n{}", m.created_at.format("%H:%M:%S"), m.role, m.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn reviews(records: &[&ReviewRecord]) -> String {
    if records.is_empty() {
        return "No matching reviews.".into();
    }
    records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let mut line = format!("{}. [{}] {}", i + 1, r.language, preview(&r.code));
            if let Some(q) = &r.question {
                let _ = write!(line, " (asked: {q})");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn stats(stats: &ReviewStats) -> String {
    if stats.total == 0 {
        return "No reviews yet.".into();
    }
    let mut out = format!(
        "Reviews: {}\nLanguages: {}\nAverage code length: {:.1} chars",
        stats.total, stats.languages_used, stats.average_code_chars
    );
    for (language, count) in &stats.by_language {
        let _ = write!(out, "\n  {}: {count}", language.display_name());
    }
    out
}

/// First line of `code`, cut to [`PREVIEW_CHARS`] characters.
fn preview(code: &str) -> String {
    let first = code.lines().find(|l| !l.trim().is_empty()).unwrap_or("").trim();
    if first.chars().count() > PREVIEW_CHARS {
        let cut: String = first.chars().take(PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        first.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensei_ai::ReviewLog;
    use sensei_common::{Language, ReviewFocus};

    #[test]
    fn banner_mentions_language_and_focus() {
        let settings = ConversationSettings {
            language: Language::Cpp,
            focus: Some(ReviewFocus::Security),
            ..Default::default()
        };
        let text = banner(&settings);
        assert!(text.contains("language: C++"));
        assert!(text.contains("focus: security"));
    }

    #[test]
    fn history_lists_roles_in_order() {
        let text = history(&[Message::user("code"), Message::assistant("hint")]);
        let user = text.find("user]\ncode").unwrap();
        let assistant = text.find("assistant]\nhint").unwrap();
        assert!(user < assistant);
    }

    #[test]
    fn empty_history() {
        assert_eq!(history(&[]), "No messages yet.");
    }

    #[test]
    fn reviews_show_language_preview_and_question() {
        let record = ReviewRecord::new(
            Language::Go,
            "\npackage main\nfunc main() {}",
            Some("why?"),
            "ok",
        );
        let text = reviews(&[&record]);
        assert_eq!(text, "1. [go] package main (asked: why?)");
    }

    #[test]
    fn long_code_preview_is_cut() {
        let code = "x".repeat(100);
        let record = ReviewRecord::new(Language::Python, code, None, "ok");
        let text = reviews(&[&record]);
        assert!(text.ends_with(&format!("{}...", "x".repeat(PREVIEW_CHARS))));
    }

    #[test]
    fn stats_block() {
        let mut log = ReviewLog::new();
        log.record(ReviewRecord::new(Language::Rust, "abcd", None, "r"));
        log.record(ReviewRecord::new(Language::Rust, "ab", None, "r"));
        let text = stats(&log.stats());
        assert!(text.starts_with("Reviews: 2\nLanguages: 1\nAverage code length: 3.0 chars"));
        assert!(text.contains("  Rust: 2"));
    }

    #[test]
    fn empty_stats() {
        assert_eq!(stats(&ReviewLog::new().stats()), "No reviews yet.");
    }

    #[test]
    fn suggestions_are_numbered() {
        let text = suggestions();
        assert!(text.contains("\n\n1. Review my Python code\n"));
        assert!(text.contains("\n\n3. "));
    }
}
