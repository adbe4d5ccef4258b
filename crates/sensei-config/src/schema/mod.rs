//! Configuration schema types for sensei.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod api;
mod conversation;
mod system;

pub use api::*;
pub use conversation::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for sensei.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct SenseiConfig {
    pub api: ApiConfig,
    pub conversation: ConversationConfig,
    pub logging: LoggingConfig,
}
