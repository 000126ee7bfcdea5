//! Error types for CodeCRT.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire CodeCRT workspace.
///
/// Every gateway-calling command catches this at the call site and renders
/// it as a single terminal line, so `Display` is what the user reads.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CodecrtError {
    /// Configuration error (missing credentials, unreadable config file)
    #[error("{0}")]
    Config(String),

    /// Non-2xx reply from a remote gateway
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Transport failure or unusable reply from a remote gateway
    #[error("{gateway}: {message}")]
    Gateway {
        gateway: &'static str,
        message: String,
    },

    /// Malformed JSON or TOML
    #[error("{format} parse error: {message}")]
    Serialization { format: String, message: String },

    #[error("File error: {message}")]
    Io { message: String },

    /// Broken invariant or an unexpected empty reply
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CodecrtError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// `gateway` names the collaborator ("completion", "execution").
    pub fn gateway(gateway: &'static str, message: impl Into<String>) -> Self {
        Self::Gateway {
            gateway,
            message: message.into(),
        }
    }

    /// `message` is already user-facing (e.g. the provider's error text).
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    fn serialization(format: &str, err: impl std::fmt::Display) -> Self {
        Self::Serialization {
            format: format.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for CodecrtError {
    fn from(err: std::io::Error) -> Self {
        Self::io(format!("{err} ({:?})", err.kind()))
    }
}

impl From<serde_json::Error> for CodecrtError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization("JSON", err)
    }
}

impl From<toml::de::Error> for CodecrtError {
    fn from(err: toml::de::Error) -> Self {
        Self::serialization("TOML", err)
    }
}

pub type Result<T> = std::result::Result<T, CodecrtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_displays_only_message() {
        let err = CodecrtError::http(502, "API Error: 502");
        assert_eq!(err.to_string(), "API Error: 502");
        assert!(matches!(err, CodecrtError::Http { status: 502, .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: CodecrtError = parse.unwrap_err().into();
        assert!(matches!(err, CodecrtError::Serialization { ref format, .. } if format == "JSON"));
    }
}
