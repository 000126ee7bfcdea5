//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: the mutable terminal record (`Session`)
//! - `challenge`: timed challenge record and its reveal output
//! - `output`: output log entries (`OutputLine`, `OutputKind`)

mod challenge;
mod model;
mod output;

pub use challenge::{Challenge, ChallengePhase, ChallengeState, Difficulty, Resolution};
pub use model::{AttemptTicket, ErrorContext, ExecutionErrorRecord, GeneratedCode, Session};
pub use output::{OutputKind, OutputLine};
