//! Editor error types.

use poll_client::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    /// The dialog was already saved or dismissed.
    #[error("the poll dialog is closed")]
    Closed,

    #[error("{list} entry {index} is out of range (len {len})")]
    EntryOutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },

    /// The route parameter is not a poll id.
    #[error("invalid poll id in route: '{0}'")]
    InvalidRouteId(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}
