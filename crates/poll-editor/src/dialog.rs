//! The poll editing surface.
//!
//! A [`PollDialog`] owns one draft for one editing session. It is opened by
//! [`PollEditor`](crate::PollEditor) and ends either dismissed
//! ([`PollDialog::clear`]) or saved ([`PollDialog::save`]). Once closed it
//! refuses further edits.

use chrono::NaiveDate;
use poll_client::{ClientError, PollResource};
use poll_core::Poll;

use crate::alerts::{AlertService, POLL_CREATED, POLL_UPDATED};
use crate::entries::{EntryList, OPTION_PREFIX, VOTER_PREFIX};
use crate::events::PollEvent;
use crate::{EditorError, PollEditor};

/// Reason recorded when the user cancels the dialog.
pub const DISMISS_CANCEL: &str = "cancel";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalOutcome {
    /// Closed after a successful save, with the entity the server returned.
    Saved(Poll),
    /// Closed without saving; the draft is discarded.
    Dismissed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogState {
    Open,
    Closed(ModalOutcome),
}

/// Which of the two editable lists an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Options,
    Voters,
}

pub struct PollDialog<'a, R, A> {
    editor: &'a PollEditor<R, A>,
    poll: Poll,
    options: EntryList,
    voters: EntryList,
    is_saving: bool,
    state: DialogState,
}

impl<'a, R: PollResource, A: AlertService> PollDialog<'a, R, A> {
    /// Start an editing session on `poll`.
    ///
    /// A new draft gets one blank option and one blank voter. Editing keeps
    /// the stored entries: a persisted poll gets its options and voters back
    /// as entries instead of a blank seed.
    pub(crate) fn new(editor: &'a PollEditor<R, A>, poll: Poll) -> Self {
        let (options, voters) = if poll.is_new() {
            (EntryList::new(OPTION_PREFIX), EntryList::new(VOTER_PREFIX))
        } else {
            (
                EntryList::from_joined(OPTION_PREFIX, &poll.options),
                EntryList::from_joined(VOTER_PREFIX, &poll.voters),
            )
        };
        Self {
            editor,
            poll,
            options,
            voters,
            is_saving: false,
            state: DialogState::Open,
        }
    }

    #[must_use]
    pub const fn poll(&self) -> &Poll {
        &self.poll
    }

    #[must_use]
    pub const fn options(&self) -> &EntryList {
        &self.options
    }

    #[must_use]
    pub const fn voters(&self) -> &EntryList {
        &self.voters
    }

    /// True while a save request is in flight.
    #[must_use]
    pub const fn is_saving(&self) -> bool {
        self.is_saving
    }

    #[must_use]
    pub const fn state(&self) -> &DialogState {
        &self.state
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open)
    }

    /// How the dialog ended, once it has.
    #[must_use]
    pub const fn outcome(&self) -> Option<&ModalOutcome> {
        match &self.state {
            DialogState::Open => None,
            DialogState::Closed(outcome) => Some(outcome),
        }
    }

    /// Mutable access to one of the lists while the dialog is open.
    pub fn entries_mut(&mut self, kind: ListKind) -> Result<&mut EntryList, EditorError> {
        self.ensure_open()?;
        Ok(match kind {
            ListKind::Options => &mut self.options,
            ListKind::Voters => &mut self.voters,
        })
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), EditorError> {
        self.ensure_open()?;
        self.poll.title = title.into();
        Ok(())
    }

    pub fn set_description(&mut self, description: Option<String>) -> Result<(), EditorError> {
        self.ensure_open()?;
        self.poll.description = description;
        Ok(())
    }

    pub fn set_expiration(&mut self, expiration: Option<NaiveDate>) -> Result<(), EditorError> {
        self.ensure_open()?;
        self.poll.expiration = expiration;
        Ok(())
    }

    pub fn add_option(&mut self) -> Result<(), EditorError> {
        self.entries_mut(ListKind::Options)?.add();
        Ok(())
    }

    pub fn remove_last_option(&mut self) -> Result<(), EditorError> {
        self.entries_mut(ListKind::Options)?.remove_last();
        Ok(())
    }

    pub fn set_option(&mut self, index: usize, text: impl Into<String>) -> Result<(), EditorError> {
        self.entries_mut(ListKind::Options)?.set_text(index, text)
    }

    pub fn add_voter(&mut self) -> Result<(), EditorError> {
        self.entries_mut(ListKind::Voters)?.add();
        Ok(())
    }

    pub fn remove_last_voter(&mut self) -> Result<(), EditorError> {
        self.entries_mut(ListKind::Voters)?.remove_last();
        Ok(())
    }

    pub fn set_voter(&mut self, index: usize, text: impl Into<String>) -> Result<(), EditorError> {
        self.entries_mut(ListKind::Voters)?.set_text(index, text)
    }

    /// Dismiss without saving.
    pub fn clear(&mut self) {
        if self.is_open() {
            self.state = DialogState::Closed(ModalOutcome::Dismissed(DISMISS_CANCEL.to_string()));
        }
    }

    /// Flatten the lists into the draft and persist it.
    ///
    /// A draft without an id is created, one with an id is updated. On success
    /// a success alert is raised, one list-modification event is broadcast and
    /// the dialog closes with the saved poll. On failure an error alert is
    /// raised and the dialog stays open for another attempt.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Closed`] if the dialog already ended, or
    /// [`EditorError::Client`] if the request failed.
    pub async fn save(&mut self) -> Result<Poll, EditorError> {
        self.ensure_open()?;
        self.is_saving = true;
        self.poll.options = self.options.joined();
        self.poll.voters = self.voters.joined();

        let is_created = self.poll.is_new();
        let resource = self.editor.resource();
        let result = if is_created {
            resource.create(&self.poll).await
        } else {
            resource.update(&self.poll).await
        };

        match result {
            Ok(saved) => {
                self.on_save_success(saved.clone(), is_created);
                Ok(saved)
            }
            Err(error) => {
                self.on_save_error(&error);
                Err(error.into())
            }
        }
    }

    fn on_save_success(&mut self, saved: Poll, is_created: bool) {
        let key = if is_created { POLL_CREATED } else { POLL_UPDATED };
        let id = saved.id.map(|id| id.to_string());
        self.editor.alerts().success(key, id.as_deref());
        self.editor.events().broadcast(PollEvent::list_modified());
        self.is_saving = false;
        self.state = DialogState::Closed(ModalOutcome::Saved(saved));
    }

    fn on_save_error(&mut self, error: &ClientError) {
        tracing::warn!(%error, "poll save failed");
        self.is_saving = false;
        self.editor.alerts().error(&error.user_message());
    }

    fn ensure_open(&self) -> Result<(), EditorError> {
        match self.state {
            DialogState::Open => Ok(()),
            DialogState::Closed(_) => Err(EditorError::Closed),
        }
    }
}
