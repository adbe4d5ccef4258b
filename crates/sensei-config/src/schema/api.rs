//! Review backend connection settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Where and how long to talk to the review backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme, host and port of the backend.
    pub base_url: String,
    /// Path of the streaming review endpoint.
    pub review_path: String,
    /// Hard bound on one whole turn: connect plus full stream drain (1-600).
    pub timeout_secs: u64,
    /// Bound on establishing the TCP/TLS connection alone.
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            review_path: "/api/review".into(),
            timeout_secs: 60,
            connect_timeout_secs: 10,
        }
    }
}

impl ApiConfig {
    /// Full review endpoint URL.
    pub fn review_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.review_path.starts_with('/') {
            format!("{base}{}", self.review_path)
        } else {
            format!("{base}/{}", self.review_path)
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
