//! Gateway contracts for the two remote collaborators.
//!
//! The interpreter only ever sees these traits; HTTP clients live in
//! `codecrt-interaction` and tests substitute scripted implementations.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Status id the execution backend uses for a clean run.
pub const STATUS_ACCEPTED: u32 = 3;
/// Status id reported for any failed run.
pub const STATUS_RUNTIME_ERROR: u32 = 6;

/// Source code submitted to the execution gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRequest {
    pub source: String,
    pub language_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStatus {
    pub id: u32,
    pub description: String,
}

impl ExecutionStatus {
    pub fn accepted() -> Self {
        Self {
            id: STATUS_ACCEPTED,
            description: "Accepted".to_string(),
        }
    }

    pub fn runtime_error() -> Self {
        Self {
            id: STATUS_RUNTIME_ERROR,
            description: "Runtime Error".to_string(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.id == STATUS_ACCEPTED
    }
}

impl Default for ExecutionStatus {
    fn default() -> Self {
        Self::accepted()
    }
}

/// Result of running code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    #[serde(default)]
    pub stdout: String,
    #[serde(default)]
    pub stderr: String,
    #[serde(default)]
    pub compile_output: String,
    #[serde(default)]
    pub status: ExecutionStatus,
}

/// The single outcome reported for a run.
///
/// Priority: compile output, then stderr, then stdout, then a non-accepted
/// status, then the "no output" fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    CompileError(String),
    RuntimeError(String),
    Output {
        stdout: String,
        /// Present when stdout was produced but the run still failed
        failed_status: Option<String>,
    },
    StatusFailure(String),
    NoOutput,
}

impl ExecutionOutcome {
    /// Diagnostic to remember for `debug`, or `None` for a clean run.
    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            ExecutionOutcome::CompileError(text)
            | ExecutionOutcome::RuntimeError(text)
            | ExecutionOutcome::StatusFailure(text) => Some(text),
            ExecutionOutcome::Output { failed_status, .. } => failed_status.as_deref(),
            ExecutionOutcome::NoOutput => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.diagnostic().is_some()
    }
}

impl ExecutionResult {
    pub fn outcome(&self) -> ExecutionOutcome {
        let compile = self.compile_output.trim();
        if !compile.is_empty() {
            return ExecutionOutcome::CompileError(compile.to_string());
        }
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return ExecutionOutcome::RuntimeError(stderr.to_string());
        }

        let failed_status = (!self.status.is_accepted()).then(|| self.status_description());
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return ExecutionOutcome::Output {
                stdout: stdout.to_string(),
                failed_status,
            };
        }
        match failed_status {
            Some(description) => ExecutionOutcome::StatusFailure(description),
            None => ExecutionOutcome::NoOutput,
        }
    }

    fn status_description(&self) -> String {
        if self.status.description.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            self.status.description.clone()
        }
    }
}

/// Executes source code remotely.
#[async_trait::async_trait]
pub trait ExecutionGateway: Send + Sync {
    async fn execute(&self, request: ExecutionRequest) -> Result<ExecutionResult>;
}

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// An ordered message list plus an optional token cap.
///
/// The model identifier is owned by the gateway client's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// A single user message.
    pub fn prompt(content: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::user(content)],
            max_tokens: None,
        }
    }

    pub fn with_messages(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            max_tokens: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Generates text from a message list.
#[async_trait::async_trait]
pub trait CompletionGateway: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}
