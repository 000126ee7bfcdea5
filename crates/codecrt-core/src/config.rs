use crate::era::Era;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPLETION_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_EXECUTION_URL: &str = "https://emkc.org/api/v2/piston";
pub const DEFAULT_MODEL: &str = "x-ai/grok-code-fast-1";
pub const DEFAULT_REFERER: &str = "http://localhost";
pub const DEFAULT_TITLE: &str = "CodeCRT";

pub const ENV_API_KEY: &str = "OPENROUTER_API_KEY";
pub const ENV_MODEL: &str = "OPENROUTER_MODEL_NAME";
pub const ENV_COMPLETION_URL: &str = "CODECRT_COMPLETION_URL";
pub const ENV_EXECUTION_URL: &str = "CODECRT_EXECUTION_URL";

/// Contents of `config.toml`. Every field has a default so an empty or
/// missing file is a valid configuration.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub completion: CompletionConfig,
    pub execution: ExecutionConfig,
    pub terminal: TerminalConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CompletionConfig {
    pub base_url: String,
    pub model: String,
    /// Sent as `HTTP-Referer`
    pub referer: String,
    /// Sent as `X-Title`
    pub title: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_COMPLETION_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            referer: DEFAULT_REFERER.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ExecutionConfig {
    pub base_url: String,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_EXECUTION_URL.to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TerminalConfig {
    pub start_mode: Era,
    /// Readline history file; `None` keeps history in memory only
    pub history_file: Option<String>,
}

impl AppConfig {
    /// Applies environment overrides for URLs and model.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_COMPLETION_URL) {
            self.completion.base_url = url;
        }
        if let Some(url) = lookup(ENV_EXECUTION_URL) {
            self.execution.base_url = url;
        }
        if let Some(model) = lookup(ENV_MODEL) {
            self.completion.model = model;
        }
    }
}

/// Contents of `secret.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openrouter: Option<OpenRouterSecret>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OpenRouterSecret {
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.completion.model, DEFAULT_MODEL);
        assert_eq!(config.terminal.start_mode, Era::Era1972);
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [completion]
            model = "openai/gpt-4o"

            [terminal]
            start_mode = "2025"
            "#,
        )
        .unwrap();
        assert_eq!(config.completion.model, "openai/gpt-4o");
        assert_eq!(config.completion.base_url, DEFAULT_COMPLETION_URL);
        assert_eq!(config.terminal.start_mode, Era::Era2025);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_EXECUTION_URL, "http://127.0.0.1:2000/api/v2"),
            (ENV_MODEL, "local-model"),
        ]);
        let mut config = AppConfig::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.execution.base_url, "http://127.0.0.1:2000/api/v2");
        assert_eq!(config.completion.model, "local-model");
        assert_eq!(config.completion.base_url, DEFAULT_COMPLETION_URL);
    }

    #[test]
    fn test_secret_without_openrouter() {
        let secret: SecretConfig = serde_json::from_str("{}").unwrap();
        assert!(secret.openrouter.is_none());
    }
}
