//! # poll-client
//!
//! HTTP resource wrapper for the `api/polls` REST collection.
//!
//! [`PollClient`] implements [`PollResource`]: create, update, find, query and
//! delete. List queries come back in a [`ResponseWrapper`] carrying the paging
//! headers (`X-Total-Count`, `Link`) next to the converted polls.

mod error;
mod http;
mod page;
mod request;
mod resource;

pub use error::{ClientError, ErrorBody, FieldError};
pub use page::{ResponseWrapper, TOTAL_COUNT_HEADER, parse_links};
pub use request::RequestOptions;
pub use resource::PollResource;

use std::time::Duration;

use poll_config::ApiConfig;

/// HTTP client bound to one poll collection URL.
#[derive(Debug, Clone)]
pub struct PollClient {
    http: reqwest::Client,
    resource_url: String,
    token: Option<String>,
}

impl PollClient {
    /// Build a client from the `[api]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            resource_url: config.resource_url(),
            token: config.has_token().then(|| config.token.clone()),
        })
    }

    /// Absolute URL of the collection this client talks to.
    #[must_use]
    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{id}", self.resource_url)
    }

    fn authorized(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}
