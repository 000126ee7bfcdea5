//! OpenRouterApiAgent - chat-completion gateway over the OpenRouter REST API.
//!
//! Credential priority: ~/.config/codecrt/secret.json > `OPENROUTER_API_KEY`.

use async_trait::async_trait;
use codecrt_core::config::{CompletionConfig, ENV_API_KEY};
use codecrt_core::gateway::{ChatMessage, CompletionGateway, CompletionRequest};
use codecrt_core::{CodecrtError, Result};
use codecrt_infrastructure::storage::SecretStorage;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;

const GATEWAY: &str = "OpenRouter";
pub const MISSING_KEY_MESSAGE: &str = "Server configuration error: OPENROUTER_API_KEY not set";

/// Completion gateway that talks to an OpenRouter-compatible `/chat/completions` endpoint.
#[derive(Clone)]
pub struct OpenRouterApiAgent {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    referer: String,
    title: String,
}

impl OpenRouterApiAgent {
    /// Creates an agent from explicit settings. A `None` key makes every
    /// request fail with a configuration error instead of reaching the network.
    pub fn new(api_key: Option<String>, config: &CompletionConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            referer: config.referer.clone(),
            title: config.title.clone(),
        }
    }

    /// Resolves credentials from secret.json, then the environment.
    ///
    /// A `model_name` in secret.json replaces the configured model.
    pub fn from_config(config: &CompletionConfig) -> Self {
        let secret = SecretStorage::new().ok().and_then(|storage| storage.openrouter());
        if let Some(secret) = secret {
            tracing::info!("[OpenRouter] Using API key from secret.json");
            let agent = Self::new(Some(secret.api_key), config);
            return match secret.model_name {
                Some(model) => agent.with_model(model),
                None => agent,
            };
        }

        let api_key = env::var(ENV_API_KEY).ok();
        if api_key.is_none() {
            tracing::warn!("[OpenRouter] No API key in secret.json or {}", ENV_API_KEY);
        }
        Self::new(api_key, config)
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    async fn send_request(&self, api_key: &str, body: &ChatCompletionRequest<'_>) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(body)
            .send()
            .await
            .map_err(|err| CodecrtError::gateway(GATEWAY, format!("request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response.text().await.unwrap_or_default();
            tracing::warn!("[OpenRouter] HTTP {} from {}", status.as_u16(), url);
            return Err(map_http_error(status, &body_text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| CodecrtError::gateway(GATEWAY, format!("failed to parse response: {err}")))?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl CompletionGateway for OpenRouterApiAgent {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(CodecrtError::config(MISSING_KEY_MESSAGE));
        };

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
        };
        tracing::debug!(
            "[OpenRouter] {} message(s) to {} (max_tokens: {:?})",
            request.messages.len(),
            self.model,
            request.max_tokens
        );

        self.send_request(api_key, &body).await
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| CodecrtError::gateway(GATEWAY, "API returned no content in the response"))
}

/// `error.message`, a plain `error` string, or `API Error: <status>`.
pub(crate) fn map_http_error(status: StatusCode, body: &str) -> CodecrtError {
    let value = serde_json::from_str::<serde_json::Value>(body).ok();
    let error = value.as_ref().and_then(|v| v.get("error"));
    let message = error
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .or_else(|| error.and_then(|e| e.as_str()))
        .map(str::to_string)
        .unwrap_or_else(|| format!("API Error: {}", status.as_u16()));

    CodecrtError::http(status.as_u16(), message)
}
