//! Timed coding-challenge record.

use super::output::OutputLine;
use crate::text::number_lines;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use uuid::Uuid;

/// Challenge difficulty. Each level owns a time-limit window in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
}

impl Difficulty {
    pub fn time_window(self) -> RangeInclusive<u32> {
        match self {
            Difficulty::Easy => 120..=150,
            Difficulty::Medium => 150..=180,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Difficulty::Easy => "🟢",
            Difficulty::Medium => "🟡",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            other => Err(format!("unknown difficulty '{other}'")),
        }
    }
}

/// Sub-state of an existing challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengePhase {
    /// Counting down, accepting submissions
    Active,
    /// A submission is out for execution/verification
    Verifying,
}

/// Observable lifecycle state of the session's challenge slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeState {
    NoChallenge,
    Active,
    Resolving,
}

/// Why a challenge ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Solved,
    Abandoned,
    TimedOut,
}

/// A generated challenge as installed in the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Identity used to drop resolutions that arrive for an older challenge
    pub id: Uuid,
    pub task: String,
    pub example: Option<String>,
    pub difficulty: Difficulty,
    pub time_limit_seconds: u32,
    pub reference_solution: String,
    pub language: String,
    pub remaining_seconds: u32,
    pub attempts: u32,
    pub phase: ChallengePhase,
}

impl Challenge {
    pub fn new(
        task: impl Into<String>,
        example: Option<String>,
        difficulty: Difficulty,
        time_limit_seconds: u32,
        reference_solution: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            task: task.into(),
            example: example.filter(|e| !e.trim().is_empty()),
            difficulty,
            time_limit_seconds,
            reference_solution: reference_solution.into(),
            language: language.into(),
            remaining_seconds: time_limit_seconds,
            attempts: 0,
            phase: ChallengePhase::Active,
        }
    }

    /// Lines announcing a freshly installed challenge.
    pub fn announcement(&self) -> Vec<OutputLine> {
        let mut lines = vec![
            OutputLine::blank(),
            OutputLine::system("┌────────────────────────────────────────────────┐"),
            OutputLine::success("           🎯 CHALLENGE STARTED! 🎯"),
            OutputLine::system("└────────────────────────────────────────────────┘"),
            OutputLine::blank(),
            OutputLine::ai(format!("📖 TASK: {}", self.task)),
        ];
        if let Some(example) = &self.example {
            lines.push(OutputLine::system(format!("💡 EXAMPLE: {example}")));
        }
        lines.extend([
            OutputLine::system(format!("⚡ DIFFICULTY: {}", self.difficulty)),
            OutputLine::system(format!("⏰ TIME LIMIT: {} seconds", self.time_limit_seconds)),
            OutputLine::blank(),
            OutputLine::system("💻 Write your solution in the editor"),
            OutputLine::system("📤 Type 'submit' when ready (multiple attempts allowed!)"),
            OutputLine::system("🏳️  Type 'giveup' to see the solution"),
            OutputLine::blank(),
        ]);
        lines
    }

    /// Reference-solution reveal shared by every way a challenge can end.
    pub fn reveal_solution(&self, resolution: Resolution) -> Vec<OutputLine> {
        let mut lines = Vec::new();
        match resolution {
            Resolution::Solved => {}
            Resolution::TimedOut => {
                lines.push(OutputLine::blank());
                lines.push(OutputLine::error("⏰ TIME'S UP!"));
                lines.push(OutputLine::blank());
            }
            Resolution::Abandoned => {
                lines.push(OutputLine::blank());
                lines.push(OutputLine::error("🏳️  Challenge ended"));
                lines.push(OutputLine::blank());
            }
        }

        lines.push(OutputLine::system("┌────────────────────────────────────────────────┐"));
        lines.push(OutputLine::ai("           📚 REFERENCE SOLUTION 📚"));
        lines.push(OutputLine::system("└────────────────────────────────────────────────┘"));
        lines.push(OutputLine::blank());

        if self.reference_solution.trim().is_empty() {
            lines.push(OutputLine::system("(Solution not available)"));
        } else {
            lines.extend(number_lines(&self.reference_solution).into_iter().map(OutputLine::code));
        }

        lines.push(OutputLine::blank());
        lines.push(OutputLine::system("┌────────────────────────────────────────────────┐"));
        lines.push(OutputLine::success("💡 Study this solution to improve your skills!"));
        lines.push(OutputLine::success("🚀 Type 'challenge' to try another one!"));
        lines.push(OutputLine::system("└────────────────────────────────────────────────┘"));
        lines
    }
}
