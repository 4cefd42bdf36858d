use compact_str::CompactString;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration-specific errors
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for field {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

#[derive(Error, Diagnostic, Debug)]
pub enum CoreError {
    #[error("Missing required arguments for {tool_name}")]
    #[diagnostic(
        code(cordial_core::missing_arguments),
        help("Required arguments not supplied: {}", missing.join(", "))
    )]
    MissingArguments {
        tool_name: String,
        missing: Vec<CompactString>,
    },

    #[error("Tool not found: {tool_name}")]
    #[diagnostic(
        code(cordial_core::tool_not_found),
        help("Available tools: {}", available_tools.join(", "))
    )]
    ToolNotFound {
        tool_name: String,
        available_tools: Vec<String>,
    },

    #[error("Invalid endpoint descriptor for {tool_name}: {details}")]
    #[diagnostic(
        code(cordial_core::invalid_descriptor),
        help("The descriptor's path template and field specs disagree")
    )]
    InvalidDescriptor { tool_name: String, details: String },

    #[error("HTTP transport error for {tool_name}")]
    #[diagnostic(
        code(cordial_core::transport_error),
        help("No response was received; check connectivity and the API base URL")
    )]
    Transport {
        tool_name: String,
        #[source]
        cause: reqwest::Error,
    },

    #[error("Discord API error {status} for {tool_name}: {payload}")]
    #[diagnostic(
        code(cordial_core::api_error),
        help("The remote rejected the request; the payload above is Discord's error body verbatim")
    )]
    Api {
        tool_name: String,
        status: u16,
        payload: String,
    },

    #[error("Failed to decode response for {tool_name}: {details}")]
    #[diagnostic(
        code(cordial_core::response_parse_error),
        help("A success status carried a body that did not match the expected shape")
    )]
    ResponseParse {
        tool_name: String,
        details: String,
        snippet: String,
    },

    #[error("Serialization error for {tool_name}")]
    #[diagnostic(
        code(cordial_core::serialization_error),
        help("Failed to encode the {encoding} request body")
    )]
    Serialization {
        tool_name: String,
        encoding: String,
        details: String,
    },

    #[error("Configuration error for field '{field}'")]
    #[diagnostic(
        code(cordial_core::configuration_error),
        help("Check configuration file at {config_path}\nExpected: {expected}")
    )]
    ConfigurationError {
        config_path: String,
        field: String,
        expected: String,
        #[source]
        cause: ConfigError,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;

// Helper functions for creating common errors with context
impl CoreError {
    pub fn missing_arguments(
        tool_name: impl Into<String>,
        missing: Vec<CompactString>,
    ) -> Self {
        Self::MissingArguments {
            tool_name: tool_name.into(),
            missing,
        }
    }

    pub fn tool_not_found(name: impl Into<String>, available: Vec<String>) -> Self {
        Self::ToolNotFound {
            tool_name: name.into(),
            available_tools: available,
        }
    }

    pub fn transport(tool_name: impl Into<String>, cause: reqwest::Error) -> Self {
        Self::Transport {
            tool_name: tool_name.into(),
            cause,
        }
    }

    pub fn api(tool_name: impl Into<String>, status: u16, payload: impl Into<String>) -> Self {
        Self::Api {
            tool_name: tool_name.into(),
            status,
            payload: payload.into(),
        }
    }

    pub fn response_parse(
        tool_name: impl Into<String>,
        details: impl Into<String>,
        body: &[u8],
    ) -> Self {
        let snippet = String::from_utf8_lossy(body);
        let snippet = snippet[..snippet.len().min(200)].to_string();
        Self::ResponseParse {
            tool_name: tool_name.into(),
            details: details.into(),
            snippet,
        }
    }

    pub fn config(path: impl Into<String>, field: impl Into<String>, cause: ConfigError) -> Self {
        let expected = match &cause {
            ConfigError::MissingField(f) => format!("a value for {f}"),
            ConfigError::InvalidValue { reason, .. } => reason.clone(),
            _ => "a readable TOML config file".to_string(),
        };
        Self::ConfigurationError {
            config_path: path.into(),
            field: field.into(),
            expected,
            cause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_embeds_payload_verbatim() {
        let err = CoreError::api(
            "get_channel",
            404,
            r#"{"message":"Unknown Channel","code":10003}"#,
        );
        let rendered = err.to_string();
        assert!(rendered.contains("Unknown Channel"));
        assert!(rendered.contains("10003"));
        assert!(rendered.contains("404"));
    }

    #[test]
    fn response_parse_truncates_snippet() {
        let body = vec![b'x'; 1000];
        let err = CoreError::response_parse("get_guild", "expected value", &body);
        match err {
            CoreError::ResponseParse { snippet, .. } => assert_eq!(snippet.len(), 200),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}
