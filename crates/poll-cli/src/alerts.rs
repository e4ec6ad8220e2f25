use poll_editor::{AlertService, Translations};

/// Alerts rendered through the English catalog onto stderr.
pub struct ConsoleAlerts {
    translations: Translations,
    quiet: bool,
}

impl ConsoleAlerts {
    pub fn new(quiet: bool) -> Self {
        Self {
            translations: Translations::english(),
            quiet,
        }
    }

    fn render_error(&self, message: &str) -> String {
        self.translations.render(message, None)
    }
}

impl AlertService for ConsoleAlerts {
    fn success(&self, key: &str, param: Option<&str>) {
        let text = self.translations.render(key, param);
        tracing::info!(key, "{text}");
        if !self.quiet {
            eprintln!("{text}");
        }
    }

    // errors are shown even in quiet mode
    fn error(&self, message: &str) {
        let text = self.render_error(message);
        tracing::debug!(message, "error alert");
        eprintln!("{text}");
    }
}
