//! # poll-core
//!
//! Core types shared by every polls crate:
//! - the [`Poll`] entity as the editor sees it (local calendar date)
//! - the [`PollPayload`] wire shape exchanged with `api/polls`
//! - date conversion between the two ([`dates`])
//! - cross-cutting error types

pub mod dates;
pub mod errors;
pub mod poll;
pub mod wire;

pub use errors::CoreError;
pub use poll::Poll;
pub use wire::PollPayload;
