//! Scripted in-memory gateways shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use codecrt_core::gateway::{
    CompletionGateway, CompletionRequest, ExecutionGateway, ExecutionRequest, ExecutionResult,
    ExecutionStatus,
};
use codecrt_core::session::{OutputLine, Session};
use codecrt_core::{CodecrtError, Result};
use codecrt_interaction::{CommandInterpreter, SharedSession};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Default)]
pub struct ScriptedExecution {
    replies: Mutex<VecDeque<Result<ExecutionResult>>>,
    requests: Mutex<Vec<ExecutionRequest>>,
    calls: AtomicUsize,
}

impl ScriptedExecution {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, reply: Result<ExecutionResult>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn push_stdout(&self, stdout: &str) {
        self.push(Ok(ExecutionResult {
            stdout: stdout.to_string(),
            ..ExecutionResult::default()
        }));
    }

    pub fn push_compile_error(&self, diagnostic: &str) {
        self.push(Ok(ExecutionResult {
            compile_output: diagnostic.to_string(),
            status: ExecutionStatus::runtime_error(),
            ..ExecutionResult::default()
        }));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ExecutionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExecutionGateway for ScriptedExecution {
    async fn execute(&self, request: ExecutionRequest) -> Result<ExecutionResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CodecrtError::internal("no scripted execution reply")))
    }
}

#[derive(Default)]
pub struct ScriptedCompletion {
    replies: Mutex<VecDeque<Result<String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
    calls: AtomicUsize,
}

impl ScriptedCompletion {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, reply: &str) {
        self.replies.lock().unwrap().push_back(Ok(reply.to_string()));
    }

    pub fn push_err(&self, err: CodecrtError) {
        self.replies.lock().unwrap().push_back(Err(err));
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionGateway for ScriptedCompletion {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CodecrtError::internal("no scripted completion reply")))
    }
}

/// Completion that signals `entered` and then blocks until `release` is notified.
pub struct GatedCompletion {
    pub entered: Notify,
    pub release: Notify,
    reply: String,
}

impl GatedCompletion {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            entered: Notify::new(),
            release: Notify::new(),
            reply: reply.to_string(),
        })
    }
}

#[async_trait]
impl CompletionGateway for GatedCompletion {
    async fn complete(&self, _request: CompletionRequest) -> Result<String> {
        self.entered.notify_one();
        self.release.notified().await;
        Ok(self.reply.clone())
    }
}

pub fn interpreter(
    execution: &Arc<ScriptedExecution>,
    completion: &Arc<ScriptedCompletion>,
) -> CommandInterpreter {
    CommandInterpreter::new(execution.clone(), completion.clone()).with_seed(42)
}

pub fn shared(session: Session) -> SharedSession {
    Arc::new(tokio::sync::Mutex::new(session))
}

pub fn texts(lines: &[OutputLine]) -> Vec<&str> {
    lines.iter().map(|l| l.text.as_str()).collect()
}

pub fn contains(lines: &[OutputLine], needle: &str) -> bool {
    lines.iter().any(|l| l.text.contains(needle))
}

pub const CHALLENGE_REPLY: &str = "TASK: Print the sum of 2 and 3\nEXAMPLE: 5\nDIFFICULTY: Easy\nTIME: 125\nSOLUTION:\n```python\nprint(2 + 3)\n```";
