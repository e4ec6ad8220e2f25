//! User-facing alerts and the message catalog they are rendered from.

use std::collections::HashMap;

pub const POLL_CREATED: &str = "pollApp.poll.created";
pub const POLL_UPDATED: &str = "pollApp.poll.updated";
pub const POLL_DELETED: &str = "pollApp.poll.deleted";

/// Receives success and error alerts raised by the editor.
///
/// Success alerts carry a translation key and an optional parameter (the poll
/// id); error alerts carry the message extracted from the failure, which may
/// itself be a translation key such as `error.validation`.
pub trait AlertService: Send + Sync {
    fn success(&self, key: &str, param: Option<&str>);
    fn error(&self, message: &str);
}

/// Key -> template catalog. Templates interpolate `{{ param }}`.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    messages: HashMap<String, String>,
}

impl Translations {
    /// The built-in English catalog.
    #[must_use]
    pub fn english() -> Self {
        Self::default()
            .with(POLL_CREATED, "A new Poll is created with identifier {{ param }}")
            .with(POLL_UPDATED, "A Poll is updated with identifier {{ param }}")
            .with(POLL_DELETED, "A Poll is deleted with identifier {{ param }}")
            .with("error.validation", "Validation failed on the submitted poll")
            .with("error.idexists", "A new poll cannot already have an ID")
            .with("error.idnull", "Invalid ID")
            .with("error.http.404", "The poll was not found")
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.messages.insert(key.into(), template.into());
        self
    }

    /// Render `key`, substituting `param`. Unknown keys render as themselves.
    #[must_use]
    pub fn render(&self, key: &str, param: Option<&str>) -> String {
        self.messages.get(key).map_or_else(
            || key.to_string(),
            |template| template.replace("{{ param }}", param.unwrap_or("")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_with_param() {
        let t = Translations::english();
        assert_eq!(
            t.render(POLL_CREATED, Some("12")),
            "A new Poll is created with identifier 12"
        );
    }

    #[test]
    fn unknown_key_renders_as_itself() {
        let t = Translations::english();
        assert_eq!(t.render("Bad Gateway", None), "Bad Gateway");
    }

    #[test]
    fn custom_entries_override() {
        let t = Translations::english().with(POLL_UPDATED, "Sondage {{ param }} mis à jour");
        assert_eq!(t.render(POLL_UPDATED, Some("3")), "Sondage 3 mis à jour");
    }
}
