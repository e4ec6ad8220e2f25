use figment::Jail;
use poll_config::{ConfigError, PollsConfig};

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("POLLS_API__BASE_URL", "https://env.example.com");
        jail.set_env("POLLS_GENERAL__DEFAULT_PAGE_SIZE", "5");

        let config = PollsConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.api.base_url, "https://env.example.com");
        assert_eq!(config.general.default_page_size, 5);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".polls")).map_err(|e| e.to_string())?;
        jail.create_file(
            poll_config::LOCAL_CONFIG_PATH,
            r#"
[api]
token = "from-file"
"#,
        )?;
        jail.set_env("POLLS_API__TOKEN", "from-env");

        let config = PollsConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.api.token, "from-env");
        Ok(())
    });
}

#[test]
fn invalid_base_url_fails_load() {
    Jail::expect_with(|jail| {
        jail.set_env("POLLS_API__BASE_URL", "polls.example.com");

        let result = PollsConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn malformed_number_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("POLLS_API__TIMEOUT_SECS", "soon");

        let result = PollsConfig::load();
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
