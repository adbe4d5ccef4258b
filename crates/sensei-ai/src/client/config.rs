//! Review client configuration.

use std::time::Duration;

use sensei_config::schema::ApiConfig;

const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/review";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewClientConfig {
    pub endpoint: String,
    /// Wall-clock bound on connect plus full stream drain.
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ReviewClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ReviewClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn from_api(api: &ApiConfig) -> Self {
        Self {
            endpoint: api.review_url(),
            timeout: api.timeout(),
            connect_timeout: api.connect_timeout(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }
}
