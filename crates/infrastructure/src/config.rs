//! Console configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. built-in defaults
//! 2. `imageer-console.toml` in the working directory, if present
//! 3. `IMAGEER_*` environment variables, e.g. `IMAGEER_REQUEST_TIMEOUT_MS`
//! 4. `PUBLIC_API_BASE_URL`

use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

use crate::adapters::DEFAULT_TIMEOUT_MS;

/// Default configuration file.
pub const CONFIG_FILE: &str = "imageer-console.toml";

/// Prefix of the configuration environment variables.
pub const ENV_PREFIX: &str = "IMAGEER";

/// Public API origin, shared with the web build of the console.
pub const API_BASE_URL_VAR: &str = "PUBLIC_API_BASE_URL";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source could not be read or does not match the expected shape.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A configured URL is malformed.
    #[error("invalid {field} URL {value:?}: {source}")]
    InvalidUrl {
        /// Offending setting.
        field: &'static str,
        /// Configured value.
        value: String,
        /// Parse failure.
        source: url::ParseError,
    },
}

/// Settings of the console.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConsoleConfig {
    /// API origin; absent or empty means same-origin requests.
    #[serde(default)]
    pub api_base_url: Option<String>,
    /// Origin of the console itself, used to resolve same-origin requests.
    #[serde(default)]
    pub origin: Option<String>,
    /// Per-request timeout.
    #[serde(default = "default_timeout_ms")]
    pub request_timeout_ms: u64,
    /// Directory of the persisted storage file.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,
}

const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            origin: None,
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            state_dir: None,
        }
    }
}

impl ConsoleConfig {
    /// Loads the configuration from the standard sources.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(
            Path::new(CONFIG_FILE),
            std::env::var(API_BASE_URL_VAR).ok(),
        )
    }

    /// Loads the configuration from `file` and an explicit API base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed.
    pub fn load_from(file: &Path, public_api_base_url: Option<String>) -> Result<Self, ConfigError> {
        let default_timeout = i64::try_from(DEFAULT_TIMEOUT_MS).unwrap_or(i64::MAX);
        let mut builder = config::Config::builder()
            .set_default("request_timeout_ms", default_timeout)?
            .add_source(config::File::from(file).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        if let Some(url) = public_api_base_url.filter(|url| !url.is_empty()) {
            builder = builder.set_override("api_base_url", url)?;
        }

        let config: Self = builder.build()?.try_deserialize()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// API origin, `None` for same-origin requests.
    #[must_use]
    pub fn base_url(&self) -> Option<String> {
        self.api_base_url
            .as_ref()
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
    }

    /// Parsed console origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the origin is not a valid URL.
    pub fn origin_url(&self) -> Result<Option<Url>, ConfigError> {
        self.origin
            .as_deref()
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                Url::parse(origin).map_err(|source| ConfigError::InvalidUrl {
                    field: "origin",
                    value: origin.to_string(),
                    source,
                })
            })
            .transpose()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = ConsoleConfig::load_from(&temp.path().join(CONFIG_FILE), None).unwrap();
        assert_eq!(config.request_timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.base_url(), None);
    }

    #[test]
    fn file_values_are_read() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join(CONFIG_FILE);
        std::fs::write(
            &file,
            "api_base_url = \"https://api.imageer.test/\"\norigin = \"https://console.imageer.test\"\nrequest_timeout_ms = 5000\n",
        )
        .unwrap();

        let config = ConsoleConfig::load_from(&file, None).unwrap();

        assert_eq!(config.base_url().as_deref(), Some("https://api.imageer.test"));
        assert_eq!(config.request_timeout_ms, 5000);
        assert_eq!(
            config.origin_url().unwrap().map(|u| u.host_str().map(str::to_string)),
            Some(Some("console.imageer.test".to_string()))
        );
    }

    #[test]
    fn public_base_url_overrides_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join(CONFIG_FILE);
        std::fs::write(&file, "api_base_url = \"https://file.test\"\n").unwrap();

        let config =
            ConsoleConfig::load_from(&file, Some("https://env.test".to_string())).unwrap();
        assert_eq!(config.base_url().as_deref(), Some("https://env.test"));

        let config = ConsoleConfig::load_from(&file, Some(String::new())).unwrap();
        assert_eq!(config.base_url().as_deref(), Some("https://file.test"));
    }

    #[test]
    fn invalid_origin_is_reported() {
        let config = ConsoleConfig {
            origin: Some("not a url".to_string()),
            ..ConsoleConfig::default()
        };
        assert!(matches!(
            config.origin_url(),
            Err(ConfigError::InvalidUrl { field: "origin", .. })
        ));
    }
}
