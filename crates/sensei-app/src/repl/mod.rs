//! Interactive stdin loop.

mod command;
mod render;

use std::future::Future;
use std::io::Write;

use sensei_ai::{Conversation, ReviewBackend, TurnError};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::{debug, info};

use command::Command;

/// Run until `/quit`, Ctrl-C at the prompt, or end of input.
pub async fn run(
    mut conversation: Conversation,
    backend: &dyn ReviewBackend,
) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut question: Option<String> = None;

    println!("{}", render::banner(conversation.settings()));
    println!("\n{}\n", render::suggestions());

    loop {
        prompt("> ")?;
        let Some(line) = next_input(&mut lines, tokio::signal::ctrl_c()).await? else {
            break;
        };

        let command = match command::parse(&line) {
            Ok(command) => command,
            Err(msg) => {
                eprintln!("{msg}");
                continue;
            }
        };

        match command {
            Command::Empty => {}
            Command::Submit(text) => {
                turn(&mut conversation, backend, &text, question.take()).await;
            }
            Command::Code => {
                println!("Paste your code, then a line with a single '.'");
                let Some(block) = read_block(&mut lines).await? else {
                    break;
                };
                turn(&mut conversation, backend, &block, question.take()).await;
            }
            Command::Ask(q) => {
                println!("Question attached to your next submission.");
                question = Some(q);
            }
            Command::Restart => {
                conversation.restart();
                question = None;
                println!("Started a new conversation.\n\n{}", render::suggestions());
            }
            Command::History => println!("{}", render::history(conversation.history().messages())),
            Command::Reviews { term, languages } => {
                let found = conversation
                    .reviews()
                    .query(term.as_deref().unwrap_or(""), &languages);
                println!("{}", render::reviews(&found));
            }
            Command::Stats => println!("{}", render::stats(&conversation.reviews().stats())),
            Command::Lang(language) => {
                conversation.set_language(language);
                println!("Language set to {}.", language.display_name());
            }
            Command::Focus(focus) => {
                conversation.set_focus(focus);
                match focus {
                    Some(f) => println!("Focus set to {f}."),
                    None => println!("Focus cleared."),
                }
            }
            Command::Suggest => println!("{}", render::suggestions()),
            Command::Help => println!("{}", render::HELP),
            Command::Quit => break,
        }
    }

    info!(
        conversation = %conversation.id().short(),
        messages = conversation.history().len(),
        "Session ended"
    );
    Ok(())
}

/// One turn: stream the reply to stdout, or report the failure and record
/// the fallback pair. Ctrl-C drops the request and leaves history alone.
async fn turn(
    conversation: &mut Conversation,
    backend: &dyn ReviewBackend,
    input: &str,
    question: Option<String>,
) {
    println!("Analyzing your code...\n");

    let on_chunk = |fragment: &str| {
        let mut out = std::io::stdout().lock();
        let _ = out.write_all(fragment.as_bytes());
        let _ = out.flush();
    };

    let result = tokio::select! {
        result = conversation.ask(backend, input, question.as_deref(), Some(&on_chunk)) => Some(result),
        _ = tokio::signal::ctrl_c() => None,
    };

    match result {
        Some(Ok(_)) => println!("\n"),
        Some(Err(TurnError::EmptyInput)) => eprintln!("{}", TurnError::EmptyInput),
        Some(Err(TurnError::Consume(e))) => {
            println!();
            eprintln!("Error: {e}");
            conversation.record_failure(input, &e);
            println!("{}\n", e.fallback_message());
        }
        None => {
            debug!("Turn cancelled");
            println!("\n[cancelled]\n");
        }
    }
}

/// Next prompt line, or `None` on end of input or when `interrupt` fires.
///
/// Once a turn has listened for Ctrl-C the default handler is gone, so the
/// idle prompt listens too and treats it as quit.
async fn next_input<R, F>(lines: &mut Lines<R>, interrupt: F) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    F: Future<Output = std::io::Result<()>>,
{
    tokio::select! {
        line = lines.next_line() => line,
        _ = interrupt => {
            println!();
            Ok(None)
        }
    }
}

/// Collect lines up to the end-of-block marker. `None` on end of input.
async fn read_block<R>(lines: &mut Lines<R>) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut block: Vec<String> = Vec::new();
    while let Some(line) = lines.next_line().await? {
        if command::is_end_of_block(&line) {
            return Ok(Some(block.join("\n")));
        }
        block.push(line.trim_end_matches('\r').to_string());
    }
    Ok(None)
}

fn prompt(text: &str) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(text.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_block_stops_at_marker() {
        let input: &[u8] = b"def f():\r\n    return 1\n.\nafter\n";
        let mut lines = BufReader::new(input).lines();

        let block = read_block(&mut lines).await.unwrap();
        assert_eq!(block.as_deref(), Some("def f():\n    return 1"));
        assert_eq!(lines.next_line().await.unwrap().as_deref(), Some("after"));
    }

    #[tokio::test]
    async fn interrupt_at_prompt_ends_input() {
        // The writer half stays open, so no line ever arrives.
        let (reader, _writer) = tokio::io::duplex(64);
        let mut lines = BufReader::new(reader).lines();

        let line = next_input(&mut lines, std::future::ready(Ok(()))).await.unwrap();
        assert_eq!(line, None);
    }

    #[tokio::test]
    async fn prompt_line_wins_without_interrupt() {
        let input: &[u8] = b"/stats\n";
        let mut lines = BufReader::new(input).lines();

        let line = next_input(&mut lines, std::future::pending()).await.unwrap();
        assert_eq!(line.as_deref(), Some("/stats"));
    }

    #[tokio::test]
    async fn read_block_without_marker_is_none() {
        let input: &[u8] = b"x = 1\n";
        let mut lines = BufReader::new(input).lines();
        assert_eq!(read_block(&mut lines).await.unwrap(), None);
    }
}
