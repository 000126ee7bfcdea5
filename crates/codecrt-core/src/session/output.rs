//! Terminal output lines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Visual category of a terminal line. The front-end picks colours from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Echo of the command the user typed
    Command,
    Output,
    System,
    Error,
    Success,
    Code,
    Ai,
}

/// A single entry of the output log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputLine {
    pub text: String,
    pub kind: OutputKind,
    pub timestamp: DateTime<Utc>,
}

impl OutputLine {
    pub fn new(text: impl Into<String>, kind: OutputKind) -> Self {
        Self {
            text: text.into(),
            kind,
            timestamp: Utc::now(),
        }
    }

    pub fn blank() -> Self {
        Self::new("", OutputKind::Output)
    }

    pub fn command(text: impl Into<String>) -> Self {
        Self::new(text, OutputKind::Command)
    }

    pub fn output(text: impl Into<String>) -> Self {
        Self::new(text, OutputKind::Output)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(text, OutputKind::System)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, OutputKind::Error)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, OutputKind::Success)
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, OutputKind::Code)
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self::new(text, OutputKind::Ai)
    }
}
