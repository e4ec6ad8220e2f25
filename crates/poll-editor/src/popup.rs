//! Opens poll dialogs from a route parameter.
//!
//! [`PollEditor`] owns the collaborators every dialog needs (the resource
//! wrapper, the alert service and the event bus) and lends them to each
//! [`PollDialog`] it opens.

use poll_client::PollResource;
use poll_core::Poll;

use crate::EditorError;
use crate::alerts::{AlertService, POLL_DELETED};
use crate::dialog::PollDialog;
use crate::events::{EventManager, PollEvent};

pub struct PollEditor<R, A> {
    resource: R,
    alerts: A,
    events: EventManager,
}

impl<R: PollResource, A: AlertService> PollEditor<R, A> {
    pub fn new(resource: R, alerts: A) -> Self {
        Self::with_events(resource, alerts, EventManager::default())
    }

    /// Share an existing event bus with other parts of the application.
    pub const fn with_events(resource: R, alerts: A, events: EventManager) -> Self {
        Self {
            resource,
            alerts,
            events,
        }
    }

    pub const fn resource(&self) -> &R {
        &self.resource
    }

    pub const fn alerts(&self) -> &A {
        &self.alerts
    }

    pub const fn events(&self) -> &EventManager {
        &self.events
    }

    /// Open the dialog on an empty draft.
    pub fn open_new(&self) -> PollDialog<'_, R, A> {
        PollDialog::new(self, Poll::new())
    }

    /// Fetch poll `id` and open the dialog on it.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Client`] if the poll cannot be fetched.
    pub async fn open_existing(&self, id: i64) -> Result<PollDialog<'_, R, A>, EditorError> {
        let poll = self.resource.find(id).await?;
        Ok(PollDialog::new(self, poll))
    }

    /// Open the dialog for a route: edit when the route carries an id,
    /// create otherwise. An empty id counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidRouteId`] if the id is not an integer, or
    /// [`EditorError::Client`] if the poll cannot be fetched.
    pub async fn open(&self, route_id: Option<&str>) -> Result<PollDialog<'_, R, A>, EditorError> {
        match route_id.filter(|id| !id.trim().is_empty()) {
            Some(raw) => self.open_existing(parse_route_id(raw)?).await,
            None => Ok(self.open_new()),
        }
    }

    /// Delete poll `id`, then alert and notify list views the same way a save
    /// does. Failures raise an error alert.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Client`] if the request failed.
    pub async fn confirm_delete(&self, id: i64) -> Result<(), EditorError> {
        match self.resource.delete(id).await {
            Ok(_) => {
                self.alerts.success(POLL_DELETED, Some(&id.to_string()));
                self.events.broadcast(PollEvent::list_modified());
                Ok(())
            }
            Err(error) => {
                tracing::warn!(%error, id, "poll delete failed");
                self.alerts.error(&error.user_message());
                Err(error.into())
            }
        }
    }
}

/// Parse a route parameter as a poll id.
///
/// # Errors
///
/// Returns [`EditorError::InvalidRouteId`] if `raw` is not an integer.
pub fn parse_route_id(raw: &str) -> Result<i64, EditorError> {
    raw.trim()
        .parse()
        .map_err(|_| EditorError::InvalidRouteId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("7", 7)]
    #[case(" 42 ", 42)]
    fn parses_numeric_ids(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_route_id(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("new")]
    #[case("7a")]
    #[case("1.5")]
    fn rejects_non_numeric_ids(#[case] raw: &str) {
        assert!(matches!(
            parse_route_id(raw),
            Err(EditorError::InvalidRouteId(ref value)) if value == raw
        ));
    }
}
