//! PistonApiAgent - execution gateway over the Piston `/execute` API.

use async_trait::async_trait;
use codecrt_core::config::ExecutionConfig;
use codecrt_core::gateway::{ExecutionGateway, ExecutionRequest, ExecutionResult, ExecutionStatus};
use codecrt_core::{CodecrtError, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const GATEWAY: &str = "Piston";

/// Piston runtime `(language, version)` for an execution-language id.
///
/// Unknown ids run as Python.
pub fn runtime_for(language_id: u32) -> (&'static str, &'static str) {
    match language_id {
        50 => ("c", "10.2.0"),
        54 => ("c++", "10.2.0"),
        63 => ("javascript", "18.15.0"),
        62 => ("java", "15.0.2"),
        _ => ("python", "3.10.0"),
    }
}

#[derive(Clone)]
pub struct PistonApiAgent {
    client: Client,
    base_url: String,
}

impl PistonApiAgent {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ExecutionConfig) -> Self {
        Self::new(config.base_url.clone())
    }
}

#[async_trait]
impl ExecutionGateway for PistonApiAgent {
    async fn execute(&self, request: ExecutionRequest) -> Result<ExecutionResult> {
        let (language, version) = runtime_for(request.language_id);
        let body = PistonRequest {
            language,
            version,
            files: vec![PistonFile {
                content: &request.source,
            }],
        };
        tracing::info!("[Piston] Executing {} bytes as {} {}", request.source.len(), language, version);

        let url = format!("{}/execute", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|err| CodecrtError::gateway(GATEWAY, format!("request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response.text().await.unwrap_or_default();
            tracing::warn!("[Piston] HTTP {} from {}", status.as_u16(), url);
            return Err(map_http_error(status, &body_text));
        }

        let parsed: PistonResponse = response
            .json()
            .await
            .map_err(|err| CodecrtError::gateway(GATEWAY, format!("failed to parse response: {err}")))?;

        let result = parsed.into_result();
        tracing::debug!("[Piston] Finished with status {}", result.status.id);
        Ok(result)
    }
}

#[derive(Serialize)]
struct PistonRequest<'a> {
    language: &'a str,
    version: &'a str,
    files: Vec<PistonFile<'a>>,
}

#[derive(Serialize)]
struct PistonFile<'a> {
    content: &'a str,
}

#[derive(Deserialize, Default)]
struct PistonResponse {
    #[serde(default)]
    run: Option<PistonStage>,
    #[serde(default)]
    compile: Option<PistonStage>,
}

#[derive(Deserialize, Default)]
struct PistonStage {
    #[serde(default)]
    stdout: Option<String>,
    #[serde(default)]
    stderr: Option<String>,
    #[serde(default)]
    code: Option<i64>,
}

impl PistonResponse {
    /// Accepted iff the run stage exited with code 0.
    fn into_result(self) -> ExecutionResult {
        let run = self.run.unwrap_or_default();
        let compile = self.compile.unwrap_or_default();
        let status = if run.code == Some(0) {
            ExecutionStatus::accepted()
        } else {
            ExecutionStatus::runtime_error()
        };

        ExecutionResult {
            stdout: run.stdout.unwrap_or_default(),
            stderr: run.stderr.unwrap_or_default(),
            compile_output: compile.stderr.unwrap_or_default(),
            status,
        }
    }
}

/// Piston reports failures as `{"message": "..."}`.
fn map_http_error(status: StatusCode, body: &str) -> CodecrtError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("API Error: {}", status.as_u16()));
    CodecrtError::http(status.as_u16(), message)
}
