//! The envelope returned by list queries.

use std::collections::BTreeMap;

use poll_core::Poll;
use reqwest::header::{HeaderMap, LINK};

use crate::error::ClientError;

/// Header carrying the total number of polls across all pages.
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// Response body, headers and status of a list query, kept together so
/// callers can page through the collection.
#[derive(Debug, Clone)]
pub struct ResponseWrapper {
    pub headers: HeaderMap,
    pub body: Vec<Poll>,
    pub status: u16,
}

impl ResponseWrapper {
    /// Value of `X-Total-Count`, if present and numeric.
    #[must_use]
    pub fn total_count(&self) -> Option<u64> {
        self.headers
            .get(TOTAL_COUNT_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
    }

    /// Page numbers keyed by relation (`next`, `prev`, `first`, `last`).
    ///
    /// An absent `Link` header yields an empty map.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Parse`] if the header is present but malformed.
    pub fn links(&self) -> Result<BTreeMap<String, u32>, ClientError> {
        match self.headers.get(LINK) {
            None => Ok(BTreeMap::new()),
            Some(value) => {
                let value = value
                    .to_str()
                    .map_err(|e| ClientError::Parse(format!("Link header: {e}")))?;
                parse_links(value)
            }
        }
    }
}

/// Parse an RFC 5988 `Link` header into page numbers keyed by `rel`.
///
/// Entries whose URL carries no `page` parameter are skipped.
///
/// # Errors
///
/// Returns [`ClientError::Parse`] for an empty header or an entry that does
/// not split into exactly `<url>; rel="name"`.
pub fn parse_links(header: &str) -> Result<BTreeMap<String, u32>, ClientError> {
    if header.trim().is_empty() {
        return Err(ClientError::Parse(
            "Link header must not be of zero length".into(),
        ));
    }

    // URLs may contain commas (sort=id,asc); an entry always starts with '<'.
    let mut entries: Vec<String> = Vec::new();
    for part in header.split(',') {
        match entries.last_mut() {
            Some(current) if !part.trim_start().starts_with('<') => {
                current.push(',');
                current.push_str(part);
            }
            _ => entries.push(part.to_string()),
        }
    }

    let mut links = BTreeMap::new();
    for entry in &entries {
        let sections: Vec<&str> = entry.split(';').collect();
        let [url, rel] = sections.as_slice() else {
            return Err(ClientError::Parse(format!(
                "Link section could not be split on ';': {entry}"
            )));
        };

        let url = url.trim().trim_start_matches('<').trim_end_matches('>');
        let name = rel
            .trim()
            .trim_start_matches("rel=")
            .trim_matches('"')
            .to_string();

        let page = url
            .split_once('?')
            .map_or("", |(_, query)| query)
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "page")
            .and_then(|(_, value)| value.parse::<u32>().ok());

        if let Some(page) = page {
            links.insert(name, page);
        }
    }
    Ok(links)
}
