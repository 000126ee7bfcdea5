//! Terminal driver: echoes commands and maintains the output log.

use crate::interpreter::{CommandInterpreter, CommandOutcome, SharedSession, Signal};
use codecrt_core::command::Command;
use codecrt_core::session::{OutputLine, Session};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Binds an interpreter to one session.
///
/// Each submitted line is echoed as `> line` into the session's log before it
/// is interpreted; its output follows. `clear` empties the log instead.
pub struct Terminal {
    interpreter: Arc<CommandInterpreter>,
    session: SharedSession,
}

impl Terminal {
    pub fn new(interpreter: Arc<CommandInterpreter>, session: Session) -> Self {
        Self {
            interpreter,
            session: Arc::new(Mutex::new(session)),
        }
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    pub fn interpreter(&self) -> &Arc<CommandInterpreter> {
        &self.interpreter
    }

    pub async fn submit(&self, raw: &str) -> CommandOutcome {
        if raw.trim().is_empty() {
            return CommandOutcome::default();
        }
        let clears = Command::parse(raw) == Some(Command::Clear);
        if !clears {
            // Echo lands before anything the clock appends while this runs
            let echo = OutputLine::command(format!("> {}", raw.trim()));
            self.session.lock().await.append_output(std::iter::once(echo));
        }
        let outcome = self.interpreter.interpret(raw, &self.session).await;

        let mut s = self.session.lock().await;
        if outcome.signal == Some(Signal::Clear) {
            s.clear_output();
        } else {
            s.append_output(outcome.lines.iter().cloned());
        }
        outcome
    }

    /// Appends lines produced outside the interpreter (evolution, fossil reports).
    pub async fn record(&self, lines: &[OutputLine]) {
        self.session.lock().await.append_output(lines.iter().cloned());
    }
}
