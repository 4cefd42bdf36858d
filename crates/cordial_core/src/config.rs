//! Configuration for the invoker.
//!
//! A small TOML file (plus environment variables for the token) is all this
//! component needs: the API base, client timeouts, and optionally an inline
//! token. [`CordialConfig::build_invoker`] turns the config into a ready
//! [`RestInvoker`].

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, CoreError, Result};
use crate::invoker::{DEFAULT_API_BASE, RestInvoker};
use crate::token::{EnvToken, StaticToken, TokenProvider};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CordialConfig {
    /// API base URL; trailing slashes are trimmed when the invoker is built.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection-establishment timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Inline bot token. When unset, the token is read from the environment
    /// (`DISCORD_BOT_TOKEN`, then `DISCORD_API_API_KEY`) at call time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

impl Default for CordialConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            token: None,
        }
    }
}

impl CordialConfig {
    /// Default config file location: `<config dir>/cordial/config.toml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cordial")
            .join("config.toml")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CoreError::config(
                path.display().to_string(),
                "config file",
                ConfigError::Io(e.to_string()),
            )
        })?;
        toml::from_str(&raw).map_err(|e| {
            CoreError::config(
                path.display().to_string(),
                "config file",
                ConfigError::TomlParse(e.to_string()),
            )
        })
    }

    /// Load from `path` (or the default location); a missing file yields the
    /// defaults rather than an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let rendered = toml::to_string_pretty(self).map_err(|e| {
            CoreError::config(
                path.display().to_string(),
                "config file",
                ConfigError::TomlSerialize(e.to_string()),
            )
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CoreError::config(
                    path.display().to_string(),
                    "config file",
                    ConfigError::Io(e.to_string()),
                )
            })?;
        }
        std::fs::write(path, rendered).map_err(|e| {
            CoreError::config(
                path.display().to_string(),
                "config file",
                ConfigError::Io(e.to_string()),
            )
        })
    }

    /// Inline token if present, environment lookup otherwise.
    pub fn token_provider(&self) -> Arc<dyn TokenProvider> {
        match &self.token {
            Some(token) => Arc::new(StaticToken::new(token.clone())),
            None => Arc::new(EnvToken::default()),
        }
    }

    pub fn build_invoker(&self) -> Result<RestInvoker> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("cordial/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(self.timeout_secs))
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .build()
            .map_err(|e| {
                CoreError::config(
                    "<builder>",
                    "http client",
                    ConfigError::InvalidValue {
                        field: "timeout_secs".to_string(),
                        reason: e.to_string(),
                    },
                )
            })?;

        Ok(RestInvoker::new(self.token_provider())
            .with_client(client)
            .with_base_url(self.api_base.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_point_at_discord() {
        let config = CordialConfig::default();
        assert_eq!(config.api_base, "https://discord.com/api/v10");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.token.is_none());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");

        let config = CordialConfig {
            api_base: "https://example.test/api".to_string(),
            timeout_secs: 30,
            connect_timeout_secs: 3,
            token: Some("abc".to_string()),
        };
        config.save(&path).expect("save");

        let loaded = CordialConfig::load(&path).expect("load");
        assert_eq!(loaded.api_base, "https://example.test/api");
        assert_eq!(loaded.timeout_secs, 30);
        assert_eq!(loaded.token.as_deref(), Some("abc"));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: CordialConfig = toml::from_str("timeout_secs = 42").expect("parse");
        assert_eq!(config.timeout_secs, 42);
        assert_eq!(config.api_base, "https://discord.com/api/v10");
    }

    #[test]
    fn load_or_default_tolerates_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.toml");
        let config = CordialConfig::load_or_default(Some(&path)).expect("defaults");
        assert_eq!(config.api_base, "https://discord.com/api/v10");
    }

    #[test]
    fn build_invoker_uses_configured_base() {
        let config = CordialConfig {
            api_base: "https://example.test/api/".to_string(),
            token: Some("t".to_string()),
            ..Default::default()
        };
        let invoker = config.build_invoker().expect("invoker");
        let rendered = format!("{invoker:?}");
        assert!(rendered.contains("https://example.test/api"));
        assert!(rendered.contains("<redacted>"));
    }
}
