//! Parsing one line of REPL input.

use sensei_common::{Language, ReviewFocus};

/// Line that ends multi-line input.
pub const END_OF_BLOCK: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Nothing typed.
    Empty,
    /// Plain text, sent as one turn.
    Submit(String),
    /// Start collecting a multi-line block.
    Code,
    /// Attach a question to the next submission.
    Ask(String),
    Restart,
    History,
    /// Search the review log. No term and no languages lists everything.
    Reviews {
        term: Option<String>,
        languages: Vec<Language>,
    },
    Stats,
    Lang(Language),
    /// Set or clear the review focus.
    Focus(Option<ReviewFocus>),
    Suggest,
    Help,
    Quit,
}

/// Parse a line. Errors are user-facing messages.
pub fn parse(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Command::Empty);
    }
    // `//` and `/*` open comments in most supported languages; that is code.
    let rest = match trimmed.strip_prefix('/') {
        Some(rest) if !rest.starts_with(['/', '*']) => rest,
        _ => return Ok(Command::Submit(line.trim_end().to_string())),
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, Some(arg.trim()).filter(|a| !a.is_empty())),
        None => (rest, None),
    };

    match (name, arg) {
        ("code", _) => Ok(Command::Code),
        ("ask", Some(question)) => Ok(Command::Ask(question.to_string())),
        ("ask", None) => Err("usage: /ask <question>".into()),
        ("restart", _) => Ok(Command::Restart),
        ("history", _) => Ok(Command::History),
        ("reviews", arg) => parse_reviews(arg.unwrap_or("")),
        ("stats", _) => Ok(Command::Stats),
        ("lang", Some(tag)) => tag
            .parse::<Language>()
            .map(Command::Lang)
            .map_err(|e| e.to_string()),
        ("lang", None) => Err("usage: /lang <language>".into()),
        ("focus", None) => Ok(Command::Focus(None)),
        ("focus", Some(name)) => name
            .parse::<ReviewFocus>()
            .map(|f| Command::Focus(Some(f)))
            .map_err(|e| e.to_string()),
        ("suggest", _) => Ok(Command::Suggest),
        ("help", _) => Ok(Command::Help),
        ("quit" | "exit", _) => Ok(Command::Quit),
        (other, _) => Err(format!("unknown command: /{other} (try /help)")),
    }
}

/// `[term words...] [--lang a,b]`, in any order.
fn parse_reviews(arg: &str) -> Result<Command, String> {
    let mut words = Vec::new();
    let mut languages = Vec::new();
    let mut tokens = arg.split_whitespace();

    while let Some(token) = tokens.next() {
        let list = match token.strip_prefix("--lang") {
            Some("") => tokens
                .next()
                .ok_or("usage: /reviews [term] [--lang a,b]")?,
            Some(inline) => match inline.strip_prefix('=') {
                Some(list) => list,
                None => {
                    words.push(token);
                    continue;
                }
            },
            None => {
                words.push(token);
                continue;
            }
        };
        for tag in list.split(',').filter(|t| !t.is_empty()) {
            let language = tag.parse::<Language>().map_err(|e| e.to_string())?;
            if !languages.contains(&language) {
                languages.push(language);
            }
        }
    }

    let term = (!words.is_empty()).then(|| words.join(" "));
    Ok(Command::Reviews { term, languages })
}

/// Whether `line` closes a `/code` block.
pub fn is_end_of_block(line: &str) -> bool {
    line.trim() == END_OF_BLOCK
}
