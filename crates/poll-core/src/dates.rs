//! Conversion between the local calendar date the editor works with and the
//! `YYYY-MM-DD` string the server stores.
//!
//! Every entity read goes through [`from_server`], every write through
//! [`to_server`]. The pair round-trips: formatting a parsed server date
//! reproduces the original string.

use chrono::{DateTime, NaiveDate};

use crate::CoreError;

/// Date format used by the server for `LocalDate` fields.
pub const SERVER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a local date for the wire. `None` stays `None`.
#[must_use]
pub fn to_server(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(SERVER_DATE_FORMAT).to_string())
}

/// Parse a wire date into a local date.
///
/// `None` and the empty string both mean "no date". RFC 3339 timestamps are
/// accepted and truncated to the calendar date in their own offset.
///
/// # Errors
///
/// Returns [`CoreError::InvalidDate`] if the value is neither `YYYY-MM-DD`
/// nor an RFC 3339 timestamp.
pub fn from_server(value: Option<&str>) -> Result<Option<NaiveDate>, CoreError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    match NaiveDate::parse_from_str(value, SERVER_DATE_FORMAT) {
        Ok(date) => Ok(Some(date)),
        Err(source) => DateTime::parse_from_rfc3339(value)
            .map(|dt| Some(dt.date_naive()))
            .map_err(|_| CoreError::InvalidDate {
                value: value.to_string(),
                source,
            }),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1970-01-01")]
    #[case("2017-06-15")]
    #[case("2024-02-29")]
    fn server_date_roundtrips(#[case] wire: &str) {
        let local = from_server(Some(wire)).unwrap();
        assert_eq!(to_server(local).as_deref(), Some(wire));
    }

    #[test]
    fn missing_and_empty_are_none() {
        assert_eq!(from_server(None).unwrap(), None);
        assert_eq!(from_server(Some("")).unwrap(), None);
        assert_eq!(from_server(Some("   ")).unwrap(), None);
        assert_eq!(to_server(None), None);
    }

    #[test]
    fn timestamp_is_truncated_to_date() {
        let date = from_server(Some("2017-06-15T23:30:00+02:00")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2017, 6, 15));
    }

    #[rstest]
    #[case("15/06/2017")]
    #[case("2017-13-01")]
    #[case("tomorrow")]
    fn rejects_garbage(#[case] wire: &str) {
        let err = from_server(Some(wire)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDate { ref value, .. } if value == wire));
    }
}
