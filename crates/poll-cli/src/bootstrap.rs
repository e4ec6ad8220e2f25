use anyhow::Context;
use poll_config::PollsConfig;

use crate::cli::GlobalFlags;

/// Load configuration from `.env`, config files and `POLLS_*`, then apply the
/// `--base-url` override.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<PollsConfig> {
    let mut config =
        PollsConfig::load_with_dotenv().context("failed to load polls configuration")?;

    if let Some(base_url) = &flags.base_url {
        config.api.base_url.clone_from(base_url);
        config
            .api
            .validate()
            .with_context(|| format!("invalid --base-url '{base_url}'"))?;
    }

    for warning in collect_unconfigured_warnings(&config, std::env::vars()) {
        tracing::warn!("{warning}");
    }

    tracing::debug!(resource_url = %config.api.resource_url(), "configuration loaded");
    Ok(config)
}

/// Spot `POLLS_*` variables that look like mistyped section keys.
fn collect_unconfigured_warnings<I>(config: &PollsConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if !config.api.has_token() && has_single_underscore_key(&env_keys, "POLLS_API_") {
        warnings.push(
            "api config looks unset while POLLS_API_* env vars exist. Use double underscores (example: POLLS_API__TOKEN)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "POLLS_GENERAL_") {
        warnings.push(
            "POLLS_GENERAL_* env vars are ignored. Use double underscores (example: POLLS_GENERAL__DEFAULT_PAGE_SIZE)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| !rest.starts_with('_'))
    })
}
