//! Bot token resolution.
//!
//! The invoker never reads ambient process state directly; it goes through a
//! [`TokenProvider`] chosen at construction. [`EnvToken`] reproduces the
//! read-at-call-time lifecycle the upstream env-var configuration expects,
//! [`StaticToken`] pins a token for tests and per-tenant setups.

use crate::error::{ConfigError, CoreError, Result};

/// Environment variables consulted by [`EnvToken`], in order.
pub const TOKEN_ENV_VARS: &[&str] = &["DISCORD_BOT_TOKEN", "DISCORD_API_API_KEY"];

/// Source of the bot token attached to every authenticated request.
pub trait TokenProvider: Send + Sync {
    /// Resolve the current bot token, without the `Bot ` prefix.
    fn token(&self) -> Result<String>;
}

/// A fixed token supplied up front.
#[derive(Clone)]
pub struct StaticToken {
    token: String,
}

impl StaticToken {
    /// Accepts tokens with or without the `Bot ` prefix.
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let token = token.strip_prefix("Bot ").unwrap_or(&token).to_string();
        Self { token }
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticToken")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Reads the token from the environment on every call.
#[derive(Debug, Clone)]
pub struct EnvToken {
    vars: Vec<String>,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self {
            vars: vec![var.into()],
        }
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self {
            vars: TOKEN_ENV_VARS.iter().map(|v| v.to_string()).collect(),
        }
    }
}

impl TokenProvider for EnvToken {
    fn token(&self) -> Result<String> {
        for var in &self.vars {
            if let Ok(value) = std::env::var(var) {
                if !value.is_empty() {
                    return Ok(value.strip_prefix("Bot ").unwrap_or(&value).to_string());
                }
            }
        }
        Err(CoreError::config(
            "<environment>",
            self.vars.join(" | "),
            ConfigError::MissingField("bot token".to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_token_strips_bot_prefix() {
        let provider = StaticToken::new("Bot abc123");
        assert_eq!(provider.token().unwrap(), "abc123");

        let provider = StaticToken::new("abc123");
        assert_eq!(provider.token().unwrap(), "abc123");
    }

    #[test]
    fn static_token_debug_redacts() {
        let provider = StaticToken::new("super-secret");
        let rendered = format!("{provider:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn env_token_reports_missing() {
        let provider = EnvToken::new("CORDIAL_TEST_TOKEN_UNSET_VAR");
        assert!(provider.token().is_err());
    }
}
