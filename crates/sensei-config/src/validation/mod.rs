//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod api;
mod conversation;
mod helpers;


use crate::schema::SenseiConfig;
use sensei_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SenseiConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    api::validate_api(&mut errors, config);
    conversation::validate_conversation(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
