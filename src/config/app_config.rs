use std::time::Duration;

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment};
use serde::Deserialize;

use crate::domain::DomainError;
use crate::infrastructure::settings::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, SettingsClientConfig};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub settings_api: SettingsApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SettingsApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for SettingsApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl From<&SettingsApiConfig> for SettingsClientConfig {
    fn from(config: &SettingsApiConfig) -> Self {
        SettingsClientConfig::new(config.base_url.clone())
            .with_timeout(Duration::from_secs(config.timeout_secs))
    }
}

impl AppConfig {
    /// Load from `config/default`, `config/local` and `APP__*` environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::with_name("config/default").required(false))
                .add_source(config::File::with_name("config/local").required(false))
                .add_source(Self::environment()),
        )
    }

    /// `APP__SETTINGS_API__BASE_URL` style overrides
    pub fn environment() -> Environment {
        Environment::with_prefix("APP")
            .separator("__")
            .try_parsing(true)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn client_config(&self) -> SettingsClientConfig {
        SettingsClientConfig::from(&self.settings_api)
    }
}

impl From<ConfigError> for DomainError {
    fn from(e: ConfigError) -> Self {
        DomainError::configuration(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{File, FileFormat, Map};

    fn env_source(vars: &[(&str, &str)]) -> Environment {
        let vars: Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::environment().source(Some(vars))
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.settings_api.base_url, "http://localhost:8080");
        assert_eq!(config.settings_api.timeout_secs, 30);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_empty_sources_fall_back_to_defaults() {
        let config = AppConfig::from_builder(config::Config::builder()).unwrap();
        assert_eq!(config.settings_api.base_url, "http://localhost:8080");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_override() {
        let toml = r#"
            [settings_api]
            base_url = "http://raspberrypi.local:9000"

            [logging]
            format = "json"
        "#;

        let config = AppConfig::from_builder(
            config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
        .unwrap();

        assert_eq!(config.settings_api.base_url, "http://raspberrypi.local:9000");
        assert_eq!(config.settings_api.timeout_secs, 30);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_client_config() {
        let toml = r#"
            [settings_api]
            timeout_secs = 5
        "#;

        let config = AppConfig::from_builder(
            config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)),
        )
        .unwrap();

        let client_config = config.client_config();
        assert_eq!(client_config.base_url, "http://localhost:8080");
        assert_eq!(client_config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_environment_override() {
        let config = AppConfig::from_builder(config::Config::builder().add_source(env_source(&[
            ("APP__SETTINGS_API__BASE_URL", "http://pi.local:9000"),
            ("APP__SETTINGS_API__TIMEOUT_SECS", "7"),
        ])))
        .unwrap();

        let client_config = config.client_config();
        assert_eq!(client_config.base_url, "http://pi.local:9000");
        assert_eq!(client_config.timeout, Duration::from_secs(7));
    }

    #[test]
    fn test_environment_overrides_file() {
        let toml = r#"
            [settings_api]
            base_url = "http://from-file:8080"
        "#;

        let config = AppConfig::from_builder(
            config::Config::builder()
                .add_source(File::from_str(toml, FileFormat::Toml))
                .add_source(env_source(&[("APP__SETTINGS_API__BASE_URL", "http://from-env:8080")])),
        )
        .unwrap();

        assert_eq!(config.settings_api.base_url, "http://from-env:8080");
    }

    #[test]
    fn test_invalid_environment_value_is_configuration_error() {
        let error = AppConfig::from_builder(config::Config::builder().add_source(env_source(&[
            ("APP__SETTINGS_API__BASE_URL", "http://pi.local:9000"),
            ("APP__SETTINGS_API__TIMEOUT_SECS", "abc"),
        ])))
        .unwrap_err();

        let error = DomainError::from(error);
        assert!(matches!(error, DomainError::Configuration { .. }));
        assert!(error.to_string().contains("timeout_secs"));
    }
}
