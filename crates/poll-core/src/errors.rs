//! Cross-cutting error types for the polls crates.
//!
//! Transport and editor errors live in their own crates (`ClientError`,
//! `EditorError`); everything here can be raised while converting a
//! [`Poll`](crate::Poll) with no I/O involved.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A date string from the server could not be read as a calendar date.
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
