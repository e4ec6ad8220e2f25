//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks and error-body classification so the
//! resource methods stay focused on request construction and response mapping.

use serde::de::DeserializeOwned;

use crate::error::{ClientError, ErrorBody};

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise the body is read once
/// and classified: a JSON error object becomes [`ClientError::Server`],
/// anything else [`ClientError::ServerText`] with the raw text.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let text = resp.text().await.unwrap_or_default();
    Err(classify_error(status.as_u16(), text))
}

/// Try the structured body first, fall back to plain text.
///
/// A JSON object only counts as structured when it carries a message or field
/// errors; otherwise the raw text is kept.
pub fn classify_error(status: u16, text: String) -> ClientError {
    match serde_json::from_str::<ErrorBody>(&text) {
        Ok(body) if body.summary().is_some() || !body.field_errors.is_empty() => {
            ClientError::Server { status, body }
        }
        _ => ClientError::ServerText { status, text },
    }
}

/// Decode a success body as JSON.
pub async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let text = resp.text().await?;
    serde_json::from_str(&text).map_err(|e| ClientError::Parse(e.to_string()))
}
