use anyhow::Context;
use chrono::NaiveDate;
use poll_core::dates;

/// Parse a date flag. Absent or blank input means no date.
pub fn parse_date(raw: Option<&str>, field: &str) -> anyhow::Result<Option<NaiveDate>> {
    dates::from_server(raw).with_context(|| {
        format!(
            "invalid {field} '{}': expected YYYY-MM-DD",
            raw.unwrap_or_default()
        )
    })
}

/// Treat a blank text flag as clearing the field.
#[must_use]
pub fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
