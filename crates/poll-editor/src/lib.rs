//! # poll-editor
//!
//! The editing side of the polls toolkit:
//! - [`EntryList`]: the option/voter lists behind the comma-joined fields
//! - [`PollDialog`]: one draft, one editing session, save or dismiss
//! - [`PollEditor`]: opens dialogs for a route and lends them collaborators
//! - [`EventManager`]: broadcasts `pollListModification` after changes
//! - [`AlertService`] / [`Translations`]: user-facing messages

pub mod alerts;
pub mod dialog;
pub mod entries;
mod error;
pub mod events;
pub mod popup;

pub use alerts::{AlertService, Translations};
pub use dialog::{DialogState, ListKind, ModalOutcome, PollDialog};
pub use entries::{Entry, EntryList};
pub use error::EditorError;
pub use events::{EventManager, POLL_LIST_MODIFICATION, PollEvent};
pub use popup::{PollEditor, parse_route_id};
