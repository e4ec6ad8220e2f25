//! Editable lists behind the comma-joined `options` and `voters` fields.
//!
//! Each entry carries a synthetic label (`option1`, `option2`, ...) that only
//! exists for display and is never sent to the server. Entries are appended
//! at the end and removed from the end; there is no reordering.

use serde::Serialize;

use crate::EditorError;

pub const OPTION_PREFIX: &str = "option";
pub const VOTER_PREFIX: &str = "voter";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryList {
    prefix: &'static str,
    entries: Vec<Entry>,
}

impl EntryList {
    /// A list seeded with one blank entry labelled `<prefix>1`.
    #[must_use]
    pub fn new(prefix: &'static str) -> Self {
        let mut list = Self {
            prefix,
            entries: Vec::new(),
        };
        list.add();
        list
    }

    /// Rebuild a list from a persisted comma-joined field.
    ///
    /// Empty text gives the same single blank entry as [`EntryList::new`].
    #[must_use]
    pub fn from_joined(prefix: &'static str, joined: &str) -> Self {
        if joined.is_empty() {
            return Self::new(prefix);
        }
        let entries = joined
            .split(',')
            .enumerate()
            .map(|(index, text)| Entry {
                id: format!("{prefix}{}", index + 1),
                text: text.to_string(),
            })
            .collect();
        Self { prefix, entries }
    }

    /// Append a blank entry and return it.
    ///
    /// The label is `<prefix><len + 1>`; since removal only drops the tail,
    /// that label is never already in use.
    pub fn add(&mut self) -> &Entry {
        let id = format!("{}{}", self.prefix, self.entries.len() + 1);
        self.entries.push(Entry {
            id,
            text: String::new(),
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Drop the trailing entry. Does nothing on an empty list.
    pub fn remove_last(&mut self) -> Option<Entry> {
        self.entries.pop()
    }

    /// Replace the text of the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::EntryOutOfRange`] if there is no such entry.
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) -> Result<(), EditorError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(EditorError::EntryOutOfRange {
                list: self.prefix,
                index,
                len,
            })?;
        entry.text = text.into();
        Ok(())
    }

    /// Entry texts joined with `,` in list order.
    #[must_use]
    pub fn joined(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }

    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
