//! Session domain model.
//!
//! The session is the one mutable record of a terminal: active era, editor
//! buffer, output log, the last execution error, staged AI output and the
//! challenge slot. Language and execution id are never stored; they are read
//! from the era row so the three can't drift apart.

use super::challenge::{Challenge, ChallengePhase, ChallengeState, Resolution};
use super::output::OutputLine;
use crate::era::{Era, placeholder_for};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A failed run, paired with the exact editor text that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionErrorRecord {
    pub diagnostic: String,
    pub code_snapshot: String,
}

/// What `debug` can work with right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorContext<'a> {
    /// Nothing captured
    None,
    /// Captured, but the editor has changed since
    Stale,
    /// Captured for the current editor text
    Current(&'a str),
}

/// AI output waiting for an explicit `insert`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCode {
    pub code: String,
    /// Era the code was written for; adopted together with the code
    pub era: Era,
}

impl GeneratedCode {
    pub fn new(code: impl Into<String>, era: Era) -> Self {
        Self {
            code: code.into(),
            era,
        }
    }

    pub fn language(&self) -> &'static str {
        self.era.language()
    }
}

/// Handle returned when a submission starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptTicket {
    pub challenge_id: Uuid,
    pub attempt: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    mode: Era,
    editor_text: String,
    output_log: Vec<OutputLine>,
    last_error: Option<ExecutionErrorRecord>,
    staged: Option<GeneratedCode>,
    challenge: Option<Challenge>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Era::default())
    }
}

impl Session {
    /// New session in `mode` with that era's placeholder in the editor.
    pub fn new(mode: Era) -> Self {
        Self {
            mode,
            editor_text: placeholder_for(mode).to_string(),
            output_log: Vec::new(),
            last_error: None,
            staged: None,
            challenge: None,
        }
    }

    pub fn with_editor_text(mut self, text: impl Into<String>) -> Self {
        self.editor_text = text.into();
        self
    }

    // ------------------------------------------------------------------
    // Mode
    // ------------------------------------------------------------------

    pub fn mode(&self) -> Era {
        self.mode
    }

    pub fn language(&self) -> &'static str {
        self.mode.language()
    }

    pub fn execution_id(&self) -> u32 {
        self.mode.execution_id()
    }

    pub fn set_mode(&mut self, mode: Era) {
        self.mode = mode;
    }

    /// Advances to the next era and returns it.
    pub fn toggle_mode(&mut self) -> Era {
        self.mode = self.mode.next();
        self.mode
    }

    // ------------------------------------------------------------------
    // Editor
    // ------------------------------------------------------------------

    pub fn editor_text(&self) -> &str {
        &self.editor_text
    }

    pub fn set_editor_text(&mut self, text: impl Into<String>) {
        self.editor_text = text.into();
    }

    // ------------------------------------------------------------------
    // Output log
    // ------------------------------------------------------------------

    pub fn output_log(&self) -> &[OutputLine] {
        &self.output_log
    }

    pub fn append_output(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        self.output_log.extend(lines);
    }

    pub fn clear_output(&mut self) {
        self.output_log.clear();
    }

    // ------------------------------------------------------------------
    // Execution error
    // ------------------------------------------------------------------

    pub fn record_execution_error(&mut self, code: impl Into<String>, diagnostic: impl Into<String>) {
        self.last_error = Some(ExecutionErrorRecord {
            diagnostic: diagnostic.into(),
            code_snapshot: code.into(),
        });
    }

    pub fn clear_execution_error(&mut self) {
        self.last_error = None;
    }

    pub fn last_execution_error(&self) -> Option<&ExecutionErrorRecord> {
        self.last_error.as_ref()
    }

    pub fn error_context(&self) -> ErrorContext<'_> {
        match &self.last_error {
            None => ErrorContext::None,
            Some(record) if record.code_snapshot != self.editor_text => ErrorContext::Stale,
            Some(record) => ErrorContext::Current(&record.diagnostic),
        }
    }

    // ------------------------------------------------------------------
    // Staged AI output
    // ------------------------------------------------------------------

    pub fn stage_generated(&mut self, generated: GeneratedCode) {
        self.staged = Some(generated);
    }

    pub fn staged(&self) -> Option<&GeneratedCode> {
        self.staged.as_ref()
    }

    /// Moves staged code into the editor and adopts its era.
    pub fn insert_staged(&mut self) -> Option<GeneratedCode> {
        let generated = self.staged.take()?;
        self.editor_text = generated.code.clone();
        self.mode = generated.era;
        Some(generated)
    }

    // ------------------------------------------------------------------
    // Challenge
    // ------------------------------------------------------------------

    pub fn challenge(&self) -> Option<&Challenge> {
        self.challenge.as_ref()
    }

    pub fn challenge_state(&self) -> ChallengeState {
        match self.challenge.as_ref().map(|c| c.phase) {
            None => ChallengeState::NoChallenge,
            Some(ChallengePhase::Active) => ChallengeState::Active,
            Some(ChallengePhase::Verifying) => ChallengeState::Resolving,
        }
    }

    /// Installs a challenge, silently replacing any previous one.
    pub fn start_challenge(&mut self, challenge: Challenge) {
        tracing::debug!(
            "[Session] Challenge {} installed ({}s)",
            challenge.id,
            challenge.time_limit_seconds
        );
        self.challenge = Some(challenge);
    }

    /// Counts an attempt and moves the challenge into verification.
    pub fn begin_attempt(&mut self) -> Option<AttemptTicket> {
        let challenge = self.challenge.as_mut()?;
        challenge.attempts += 1;
        challenge.phase = ChallengePhase::Verifying;
        Some(AttemptTicket {
            challenge_id: challenge.id,
            attempt: challenge.attempts,
        })
    }

    /// Returns a verifying challenge to `Active`. No-op for other identities.
    pub fn end_attempt(&mut self, challenge_id: Uuid) {
        if let Some(challenge) = self.challenge.as_mut().filter(|c| c.id == challenge_id) {
            challenge.phase = ChallengePhase::Active;
        }
    }

    /// True while the challenge with this identity is still installed.
    pub fn is_current_challenge(&self, challenge_id: Uuid) -> bool {
        self.challenge.as_ref().is_some_and(|c| c.id == challenge_id)
    }

    /// Ends the challenge and returns the reveal lines.
    ///
    /// With `expected = Some(id)` only that challenge is resolved. Resolving an
    /// empty slot or a replaced challenge returns no lines and changes nothing.
    pub fn resolve_challenge(&mut self, expected: Option<Uuid>, resolution: Resolution) -> Vec<OutputLine> {
        let matches = match (&self.challenge, expected) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(current), Some(id)) => current.id == id,
        };
        if !matches {
            return Vec::new();
        }

        let Some(mut challenge) = self.challenge.take() else {
            return Vec::new();
        };
        tracing::info!(
            "[Session] Challenge {} resolved: {:?} after {} attempt(s)",
            challenge.id,
            resolution,
            challenge.attempts
        );
        let lines = challenge.reveal_solution(resolution);
        challenge.remaining_seconds = 0;
        challenge.attempts = 0;
        lines
    }

    /// One elapsed second. Returns the reveal lines when the countdown hits zero.
    pub fn tick(&mut self) -> Vec<OutputLine> {
        let Some(challenge) = self.challenge.as_mut() else {
            return Vec::new();
        };
        challenge.remaining_seconds = challenge.remaining_seconds.saturating_sub(1);
        if challenge.remaining_seconds > 0 {
            return Vec::new();
        }
        let id = challenge.id;
        self.resolve_challenge(Some(id), Resolution::TimedOut)
    }
}
