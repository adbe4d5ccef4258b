mod cli;
mod repl;

use std::path::Path;

use sensei_ai::{Conversation, ConversationSettings, ReviewClient, ReviewClientConfig};
use sensei_common::{ConfigError, SenseiError};
use sensei_config::SenseiConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn load_config(args: &cli::Args) -> (SenseiConfig, Option<ConfigError>) {
    let loaded = match args.config.as_deref() {
        Some(path) => sensei_config::load_config_from(Path::new(path)),
        None => sensei_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (SenseiConfig::default(), Some(e)),
    }
}

fn init_logging(args: &cli::Args, config: &SenseiConfig) {
    let fallback = format!("sensei={}", config.logging.level.as_directive());
    let directive = args.log_level.clone().unwrap_or_else(|| fallback.clone());
    let directive = directive
        .parse()
        .or_else(|_| fallback.parse())
        .unwrap_or_else(|_| LevelFilter::INFO.into());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

/// Fold CLI overrides into the loaded config.
fn apply_overrides(config: &mut SenseiConfig, args: &cli::Args) {
    if let Some(language) = args.language {
        config.conversation.default_language = language;
    }
    if args.focus.is_some() {
        config.conversation.focus = args.focus;
    }
    if let Some(n) = args.history_length {
        config.conversation.history_length = n;
    }
}

#[tokio::main]
async fn main() -> sensei_common::Result<()> {
    let args = cli::parse();

    // Logging needs the configured level, so load first and report after.
    let (mut config, load_error) = load_config(&args);
    init_logging(&args, &config);

    tracing::info!("sensei v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    apply_overrides(&mut config, &args);
    if let Err(e) = sensei_config::validation::validate(&config) {
        return Err(SenseiError::Config(e));
    }

    let mut client_config = ReviewClientConfig::from_api(&config.api);
    if let Some(ref endpoint) = args.endpoint {
        client_config.endpoint = endpoint.clone();
    }
    tracing::info!(endpoint = %client_config.endpoint, "Review backend");
    let client =
        ReviewClient::new(client_config).map_err(|e| SenseiError::Network(e.to_string()))?;

    let conversation = Conversation::new(ConversationSettings::from(&config.conversation));
    tracing::info!(conversation = %conversation.id().short(), "Conversation started");

    repl::run(conversation, &client).await?;
    tracing::info!("Shutdown complete");
    Ok(())
}
