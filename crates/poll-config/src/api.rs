//! REST endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    String::from("http://localhost:8080")
}

fn default_resource_path() -> String {
    String::from("api/polls")
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    String::from("polls/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Application root (e.g., `https://polls.example.com`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Collection path below the root.
    #[serde(default = "default_resource_path")]
    pub resource_path: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Bearer token sent with every request. Empty means anonymous.
    #[serde(default)]
    pub token: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            resource_path: default_resource_path(),
            timeout_secs: default_timeout_secs(),
            token: String::new(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Whether a bearer token is configured.
    #[must_use]
    pub fn has_token(&self) -> bool {
        !self.token.is_empty()
    }

    /// Absolute URL of the poll collection, e.g. `http://localhost:8080/api/polls`.
    #[must_use]
    pub fn resource_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.resource_path.trim_matches('/')
        )
    }

    /// Check the values that would otherwise only fail on the first request.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-HTTP base URL or a zero
    /// timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.base_url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}
