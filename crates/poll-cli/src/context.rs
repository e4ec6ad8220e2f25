use anyhow::Context;
use poll_client::PollClient;
use poll_config::PollsConfig;
use poll_editor::PollEditor;

use crate::alerts::ConsoleAlerts;
use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: PollsConfig,
    pub editor: PollEditor<PollClient, ConsoleAlerts>,
}

impl AppContext {
    pub fn init(config: PollsConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let client = PollClient::new(&config.api).context("failed to build HTTP client")?;
        let editor = PollEditor::new(client, ConsoleAlerts::new(flags.quiet));
        Ok(Self { config, editor })
    }
}
