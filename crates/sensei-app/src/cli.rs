use clap::Parser;
use sensei_common::{Language, ReviewFocus};

/// sensei: an AI coding sensei that reviews your code in conversation.
#[derive(Parser, Debug)]
#[command(name = "sensei", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (e.g. debug, sensei=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Review endpoint URL, replacing the configured base_url + review_path.
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Language of the code you will submit.
    #[arg(short = 'l', long)]
    pub language: Option<Language>,

    /// Specialised review focus (performance, security, best-practices, ...).
    #[arg(short = 'f', long)]
    pub focus: Option<ReviewFocus>,

    /// Number of prior messages sent as context.
    #[arg(long)]
    pub history_length: Option<u32>,
}

pub fn parse() -> Args {
    Args::parse()
}
