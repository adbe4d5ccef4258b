//! sensei configuration system.
//!
//! TOML-based configuration with full validation. All sections use sensible
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sensei_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.api.review_url());
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::SenseiConfig;

use sensei_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path.
///
/// Creates a default file if none exists, then validates the result.
pub fn load_config() -> Result<SenseiConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path (the `--config` override).
pub fn load_config_from(path: &Path) -> Result<SenseiConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
