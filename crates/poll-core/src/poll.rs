use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A poll as held by the editor: the expiration is a local calendar date,
/// options and voters are the comma-joined text that goes over the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Poll {
    /// Server-assigned identifier, absent until persisted.
    pub id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub expiration: Option<NaiveDate>,
    pub options: String,
    pub voters: String,
}

impl Poll {
    /// An empty, not yet persisted draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True until the server has assigned an id.
    #[must_use]
    pub const fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Whether both polls denote the same persisted entity.
    ///
    /// Identity is the id alone; a poll without an id is never the same
    /// entity as anything, itself included.
    #[must_use]
    pub fn same_entity(&self, other: &Self) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }
}
