//! The JSON body exchanged with `api/polls`.
//!
//! The server may send `null` for any text column it never populated, so every
//! text field is optional on the way in. On the way out options and voters are
//! always sent as flat strings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{CoreError, Poll, dates};

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PollPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub expiration: Option<String>,
    /// Comma-joined option texts.
    #[serde(default)]
    pub options: Option<String>,
    /// Comma-joined voter names.
    #[serde(default)]
    pub voters: Option<String>,
}

impl PollPayload {
    /// Build the request body for a poll, formatting the expiration date for
    /// the server.
    #[must_use]
    pub fn from_poll(poll: &Poll) -> Self {
        Self {
            id: poll.id,
            title: Some(poll.title.clone()),
            description: poll.description.clone(),
            expiration: dates::to_server(poll.expiration),
            options: Some(poll.options.clone()),
            voters: Some(poll.voters.clone()),
        }
    }

    /// Convert a server response into a local [`Poll`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDate`] if the expiration is not a date.
    pub fn into_poll(self) -> Result<Poll, CoreError> {
        Ok(Poll {
            id: self.id,
            title: self.title.unwrap_or_default(),
            description: self.description,
            expiration: dates::from_server(self.expiration.as_deref())?,
            options: self.options.unwrap_or_default(),
            voters: self.voters.unwrap_or_default(),
        })
    }
}

impl From<&Poll> for PollPayload {
    fn from(poll: &Poll) -> Self {
        Self::from_poll(poll)
    }
}

impl TryFrom<PollPayload> for Poll {
    type Error = CoreError;

    fn try_from(payload: PollPayload) -> Result<Self, Self::Error> {
        payload.into_poll()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Poll {
        Poll {
            id: Some(7),
            title: "Team lunch".into(),
            description: Some("Where do we eat on Friday?".into()),
            expiration: NaiveDate::from_ymd_opt(2017, 6, 15),
            options: "Pizza,Sushi".into(),
            voters: "alice,bob".into(),
        }
    }

    #[test]
    fn new_poll_omits_id_on_the_wire() {
        let poll = Poll {
            id: None,
            ..sample()
        };
        let json = serde_json::to_value(PollPayload::from_poll(&poll)).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["expiration"], "2017-06-15");
        assert_eq!(json["options"], "Pizza,Sushi");
    }

    #[test]
    fn server_nulls_become_empty_text() {
        let payload: PollPayload = serde_json::from_str(
            r#"{"id": 3, "title": null, "description": null, "expiration": null, "options": null, "voters": null}"#,
        )
        .unwrap();
        let poll = payload.into_poll().unwrap();
        assert_eq!(poll.id, Some(3));
        assert_eq!(poll.title, "");
        assert_eq!(poll.options, "");
        assert_eq!(poll.expiration, None);
    }

    #[test]
    fn fetch_then_save_reproduces_server_date() {
        let from_server: PollPayload = serde_json::from_str(
            r#"{"id": 7, "title": "Team lunch", "expiration": "2017-06-15", "options": "Pizza,Sushi", "voters": "alice,bob"}"#,
        )
        .unwrap();
        let original = from_server.expiration.clone();

        let local = Poll::try_from(from_server).unwrap();
        assert_eq!(local.expiration, NaiveDate::from_ymd_opt(2017, 6, 15));

        let back = PollPayload::from(&local);
        assert_eq!(back.expiration, original);
    }

    #[test]
    fn invalid_server_date_is_an_error() {
        let payload = PollPayload {
            expiration: Some("not-a-date".into()),
            ..PollPayload::default()
        };
        assert!(matches!(
            payload.into_poll(),
            Err(CoreError::InvalidDate { .. })
        ));
    }
}
