//! Query options for listing polls.

/// Paging, sorting and free-text filter for [`query`](crate::PollResource::query).
///
/// Each present option becomes one query-string pair; `sort` repeats once per
/// entry (`sort=title,asc&sort=id,desc`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Vec<String>,
    pub query: Option<String>,
}

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub const fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Add a sort criterion, e.g. `"title,asc"`.
    #[must_use]
    pub fn sort(mut self, criterion: impl Into<String>) -> Self {
        self.sort.push(criterion.into());
        self
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.size.is_none() && self.sort.is_empty() && self.query.is_none()
    }

    /// Ordered key/value pairs, not yet encoded.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        for criterion in &self.sort {
            pairs.push(("sort", criterion.clone()));
        }
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        pairs
    }

    /// URL-encoded query string without the leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.to_pairs()
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
