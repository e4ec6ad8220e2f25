//! Application-wide notification bus.
//!
//! List views subscribe and refresh when a `pollListModification` event
//! arrives. Broadcasting with nobody listening is fine.

use serde::Serialize;
use tokio::sync::broadcast;

/// Name of the event sent after a poll is created, updated or deleted.
pub const POLL_LIST_MODIFICATION: &str = "pollListModification";

const DEFAULT_CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PollEvent {
    pub name: String,
    pub content: String,
}

impl PollEvent {
    #[must_use]
    pub fn list_modified() -> Self {
        Self {
            name: POLL_LIST_MODIFICATION.to_string(),
            content: String::from("OK"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventManager {
    sender: broadcast::Sender<PollEvent>,
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl EventManager {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Send an event to every current subscriber; returns how many received it.
    pub fn broadcast(&self, event: PollEvent) -> usize {
        tracing::debug!(name = %event.name, "broadcasting event");
        self.sender.send(event).unwrap_or(0)
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PollEvent> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::broadcast::error::TryRecvError;

    use super::*;

    #[test]
    fn broadcast_without_subscribers_is_not_an_error() {
        let events = EventManager::default();
        assert_eq!(events.broadcast(PollEvent::list_modified()), 0);
    }

    #[test]
    fn every_subscriber_gets_the_event() {
        let events = EventManager::default();
        let mut first = events.subscribe();
        let mut second = events.clone().subscribe();

        assert_eq!(events.broadcast(PollEvent::list_modified()), 2);
        assert_eq!(first.try_recv().unwrap().name, POLL_LIST_MODIFICATION);
        assert_eq!(second.try_recv().unwrap().content, "OK");
        assert!(matches!(first.try_recv(), Err(TryRecvError::Empty)));
    }
}
