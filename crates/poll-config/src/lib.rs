//! # poll-config
//!
//! Layered configuration loading for the polls toolkit using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`POLLS_*` prefix, `__` as separator)
//! 2. Project-level `.polls/config.toml`
//! 3. User-level `~/.config/polls/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `POLLS_API__BASE_URL` -> `api.base_url`,
//! `POLLS_GENERAL__DEFAULT_PAGE_SIZE` -> `general.default_page_size`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use poll_config::PollsConfig;
//!
//! let config = PollsConfig::load_with_dotenv().expect("config");
//! println!("polls live at {}", config.api.resource_url());
//! ```

mod api;
mod error;
mod general;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".polls/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PollsConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PollsConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is
    /// invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.api.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("POLLS_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("polls").join("config.toml"))
    }

    /// Load `.env` from the workspace root, or the current directory.
    ///
    /// Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = PollsConfig::default();
        assert_eq!(config.api.resource_url(), "http://localhost:8080/api/polls");
        assert_eq!(config.general.default_page_size, 20);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: PollsConfig = PollsConfig::figment().extract()?;
            assert_eq!(config.api.timeout_secs, 10);
            assert_eq!(config.general.default_sort, "id,asc");
            Ok(())
        });
    }
}
