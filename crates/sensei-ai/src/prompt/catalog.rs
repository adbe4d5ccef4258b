//! Static instruction text.
//!
//! The turn step passes these strings through untouched; nothing here is
//! parsed or rewritten.

use sensei_common::{Language, ReviewFocus};

pub const BASE_INSTRUCTIONS: &str = "\
You are a helpful AI coding sensei. You help students learn programming through Socratic questioning.

Key principles:
- Ask guiding questions rather than giving direct answers
- Help students discover solutions themselves
- Explain concepts clearly with examples
- Identify what's wrong and why, with clear reasoning
- Encourage good coding practices
- Be encouraging and supportive
- Adapt explanations to student level

Remember: Your goal is to help students become better programmers, not just fix their code.";

/// Advice specific to one language, if we have any.
pub fn language_guidance(language: Language) -> Option<&'static str> {
    match language {
        Language::Python => Some(
            "When reviewing Python code, pay special attention to:
- Pythonic idioms: comprehensions, generators, context managers
- PEP 8 naming and layout, docstrings, type hints
- Pitfalls: mutable default arguments, late-binding closures, `is` vs `==`
Ask whether they considered a more Pythonic alternative and how they test it.",
        ),
        Language::Javascript => Some(
            "When reviewing JavaScript code, pay special attention to:
- `const`/`let` over `var`, strict equality, arrow function `this` binding
- Promise and async/await error handling
- Pitfalls: implicit coercion, closures in loops, unhandled rejections
Ask how the code behaves with unexpected input types.",
        ),
        Language::Typescript => Some(
            "When reviewing TypeScript code, pay special attention to:
- Precise types over `any`, discriminated unions, narrowing
- Strict compiler options and null safety
- Pitfalls: unchecked type assertions, overly wide generics
Ask what invariants the types are meant to encode.",
        ),
        Language::Java => Some(
            "When reviewing Java code, pay special attention to:
- Encapsulation, immutability, and sensible class boundaries
- Exception handling: checked vs unchecked, try-with-resources
- Pitfalls: `equals`/`hashCode` contracts, null handling, string comparison with `==`
Ask how the design would change as requirements grow.",
        ),
        Language::Cpp => Some(
            "When reviewing C++ code, pay special attention to:
- RAII, smart pointers, and clear ownership
- const-correctness and move semantics
- Pitfalls: undefined behaviour, dangling references, buffer overruns
Ask who owns each resource and when it is released.",
        ),
        Language::Go => Some(
            "When reviewing Go code, pay special attention to:
- Explicit error handling and wrapping
- Goroutine lifetimes, channels, and context cancellation
- Pitfalls: data races, nil interfaces, loop variable capture
Ask how the code behaves under concurrent use.",
        ),
        Language::Rust => Some(
            "When reviewing Rust code, pay special attention to:
- Ownership and borrowing: avoid needless clones
- `Result` and `?` over `unwrap`, meaningful error types
- Iterators, pattern matching, and traits used idiomatically
Ask why a given lifetime or allocation is necessary.",
        ),
        Language::Unknown => None,
    }
}

/// Extra instructions for a specialised review.
pub fn focus_prompt(focus: ReviewFocus) -> &'static str {
    match focus {
        ReviewFocus::Performance => {
            "Focus on performance analysis: time and space complexity, redundant work, \
             unnecessary copies. Ask whether they have measured it and what input sizes matter."
        }
        ReviewFocus::Security => {
            "Focus on security concerns: input validation, injection, secrets handling, \
             authentication and authorisation mistakes. Ask where untrusted data enters."
        }
        ReviewFocus::BestPractices => {
            "Focus on coding best practices: naming, single responsibility, error handling, \
             testability, and consistency with the language's conventions."
        }
        ReviewFocus::Refactoring => {
            "Focus on refactoring opportunities: duplication, long functions, deep nesting, \
             unclear abstractions. Ask which change would make the code easiest to extend."
        }
        ReviewFocus::Debug => {
            "Focus on debugging assistance: help them form hypotheses, isolate the failing \
             case, and read error messages. Guide them to the fix rather than stating it."
        }
        ReviewFocus::Checklist => {
            "Perform a comprehensive review checklist: correctness, edge cases, readability, \
             error handling, performance, security, and tests. Mark each as fine or needs work."
        }
        ReviewFocus::Beginner => {
            "This student appears to be a beginner. Use simple language, explain basic \
             concepts, give small examples, and celebrate progress."
        }
        ReviewFocus::Advanced => {
            "This student appears to be advanced. Discuss trade-offs, architecture, \
             performance characteristics, and edge cases in depth."
        }
    }
}

/// Full instruction block for a turn: base text, then language guidance,
/// then the focus, separated by blank lines.
pub fn instructions_for(language: Language, focus: Option<ReviewFocus>) -> String {
    let mut parts = vec![BASE_INSTRUCTIONS];
    if let Some(guidance) = language_guidance(language) {
        parts.push(guidance);
    }
    if let Some(focus) = focus {
        parts.push(focus_prompt(focus));
    }
    parts.join("\n\n")
}

/// Starter prompt offered on an empty conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub label: &'static str,
    pub text: &'static str,
}

pub const SUGGESTIONS: [Suggestion; 3] = [
    Suggestion {
        label: "Review my Python code",
        text: "def fibonacci(n):\n    if n <= 1:\n        return n\n    return fibonacci(n-1) + fibonacci(n-2)",
    },
    Suggestion {
        label: "Find bugs in my code",
        text: "How can I improve this code?",
    },
    Suggestion {
        label: "Learn best practices",
        text: "What are best practices for error handling?",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_language_has_guidance() {
        for lang in Language::ALL {
            let guidance = language_guidance(lang);
            if lang == Language::Unknown {
                assert!(guidance.is_none());
            } else {
                let text = guidance.unwrap();
                assert!(text.contains(lang.display_name()), "{lang}: {text}");
            }
        }
    }

    #[test]
    fn instructions_start_with_base() {
        let text = instructions_for(Language::Unknown, None);
        assert_eq!(text, BASE_INSTRUCTIONS);
    }

    #[test]
    fn instructions_append_language_then_focus() {
        let text = instructions_for(Language::Rust, Some(ReviewFocus::Security));
        let base = text.find("AI coding sensei").unwrap();
        let lang = text.find("reviewing Rust code").unwrap();
        let focus = text.find("security concerns").unwrap();
        assert!(base < lang && lang < focus);
        assert!(text.contains("\n\n"));
    }

    #[test]
    fn every_focus_has_text() {
        for focus in ReviewFocus::ALL {
            assert!(!focus_prompt(focus).is_empty());
        }
    }

    #[test]
    fn suggestions_are_non_empty() {
        assert!(SUGGESTIONS.iter().all(|s| !s.label.is_empty() && !s.text.trim().is_empty()));
    }
}
