//! Resource wrapper error types.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to the poll collection.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status with a structured JSON error body.
    #[error("API error ({status}): {}", .body.summary().unwrap_or("no message"))]
    Server {
        /// HTTP status code returned by the server.
        status: u16,
        /// Decoded error body.
        body: ErrorBody,
    },

    /// Non-success status whose body is not a structured error.
    #[error("API error ({status}): {text}")]
    ServerText {
        /// HTTP status code returned by the server.
        status: u16,
        /// Raw response body.
        text: String,
    },

    /// A success response could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// The request was rejected before being sent.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Converting between wire and local representations failed.
    #[error(transparent)]
    Core(#[from] poll_core::CoreError),
}

impl ClientError {
    /// HTTP status of a server-side failure, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::ServerText { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Message suitable for a user-facing alert.
    ///
    /// Structured bodies yield their own message; plain-text bodies are shown
    /// verbatim; everything else uses the error's display text.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Server { status, body } => body
                .summary()
                .map_or_else(|| format!("HTTP {status}"), str::to_string),
            Self::ServerText { status, text } if text.trim().is_empty() => {
                format!("HTTP {status}")
            }
            Self::ServerText { text, .. } => text.clone(),
            other => other.to_string(),
        }
    }
}

/// Structured error body as produced by the server's exception translator.
///
/// Older servers send `message`/`description`/`fieldErrors`; problem-details
/// servers send `title`/`detail`. All fields are optional so either decodes.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub field_errors: Vec<FieldError>,
}

impl ErrorBody {
    /// First non-empty of message, description, detail, title.
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        [&self.message, &self.description, &self.detail, &self.title]
            .into_iter()
            .filter_map(Option::as_deref)
            .find(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    #[serde(default)]
    pub object_name: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub message: String,
}
