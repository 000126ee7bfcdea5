//! Terminal command grammar.
//!
//! Every input line maps to exactly one [`Command`]. The builtin table feeds
//! the front-end's completion and hints; `help` text lives with the
//! interpreter.

use serde::Serialize;
use std::sync::OnceLock;

/// A parsed terminal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Clear,
    Toggle,
    Time,
    Run,
    Debug,
    Explain,
    Insert,
    Evolve,
    Exit,
    Hello,
    Coffee,
    Hack,
    Matrix,
    Challenge,
    Submit,
    /// `giveup`, `surrender` or `endchallenge`
    GiveUp,
    Export,
    /// `ai <free text>`; the text keeps its original casing
    Ai(String),
    /// Case-folded input that matched nothing
    Unknown(String),
}

impl Command {
    /// Parses one raw input line. Blank input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let folded = trimmed.to_lowercase();

        let command = match folded.as_str() {
            "help" => Command::Help,
            "clear" => Command::Clear,
            "toggle" => Command::Toggle,
            "time" => Command::Time,
            "run" => Command::Run,
            "debug" => Command::Debug,
            "explain" => Command::Explain,
            "insert" => Command::Insert,
            "evolve" => Command::Evolve,
            "exit" => Command::Exit,
            "hello" => Command::Hello,
            "coffee" => Command::Coffee,
            "hack" => Command::Hack,
            "matrix" => Command::Matrix,
            "challenge" => Command::Challenge,
            "submit" => Command::Submit,
            "giveup" | "surrender" | "endchallenge" => Command::GiveUp,
            "export" => Command::Export,
            _ => match trimmed.get(..3) {
                Some(prefix) if prefix.eq_ignore_ascii_case("ai ") => {
                    Command::Ai(trimmed[3..].trim().to_string())
                }
                _ => Command::Unknown(folded),
            },
        };
        Some(command)
    }
}

/// A builtin terminal command, for completion and hints.
#[derive(Debug, Clone, Serialize)]
pub struct BuiltinCommand {
    pub name: &'static str,
    pub usage: &'static str,
    pub description: &'static str,
}

impl BuiltinCommand {
    pub const fn new(name: &'static str, usage: &'static str, description: &'static str) -> Self {
        Self {
            name,
            usage,
            description,
        }
    }
}

static BUILTIN_COMMANDS: OnceLock<Vec<BuiltinCommand>> = OnceLock::new();

/// All builtin commands, initialized on first access.
pub fn builtin_commands() -> &'static [BuiltinCommand] {
    BUILTIN_COMMANDS.get_or_init(|| {
        vec![
            BuiltinCommand::new("help", "help", "Show this help menu"),
            BuiltinCommand::new("clear", "clear", "Clear terminal output"),
            BuiltinCommand::new("toggle", "toggle", "Switch: 1972(C) → 1985(C++) → 2025(Python)"),
            BuiltinCommand::new("time", "time", "Display current date and time"),
            BuiltinCommand::new("exit", "exit", "Power off system"),
            BuiltinCommand::new("run", "run", "Execute code in the editor"),
            BuiltinCommand::new("ai", "ai <message>", "Ask AI to generate code"),
            BuiltinCommand::new("debug", "debug", "Fix errors in current code with AI"),
            BuiltinCommand::new("explain", "explain", "AI explains what the code does"),
            BuiltinCommand::new("insert", "insert", "Insert last AI code into editor"),
            BuiltinCommand::new("export", "export", "Save current code as file"),
            BuiltinCommand::new("evolve", "evolve", "Watch code transform through history!"),
            BuiltinCommand::new("hello", "hello", "Hello World in current era"),
            BuiltinCommand::new("coffee", "coffee", "Coffee break"),
            BuiltinCommand::new("hack", "hack", "Access the mainframe"),
            BuiltinCommand::new("matrix", "matrix", "Enter the Matrix..."),
            BuiltinCommand::new("challenge", "challenge", "Speed coding challenge"),
            BuiltinCommand::new("submit", "submit", "Submit solution for challenge"),
            BuiltinCommand::new("giveup", "giveup", "End active challenge"),
            BuiltinCommand::new("surrender", "surrender", "End active challenge"),
            BuiltinCommand::new("endchallenge", "endchallenge", "End active challenge"),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_trimmed_and_case_folded() {
        assert_eq!(Command::parse("  TOGGLE \n"), Some(Command::Toggle));
        assert_eq!(Command::parse("Surrender"), Some(Command::GiveUp));
        assert_eq!(Command::parse("   "), None);
    }

    #[test]
    fn test_ai_prefix_keeps_casing() {
        assert_eq!(
            Command::parse("AI Make a FizzBuzz"),
            Some(Command::Ai("Make a FizzBuzz".to_string()))
        );
        // Bare "ai" has no prefix separator
        assert_eq!(Command::parse("ai"), Some(Command::Unknown("ai".to_string())));
    }

    #[test]
    fn test_unknown_is_folded() {
        assert_eq!(Command::parse("Launch"), Some(Command::Unknown("launch".to_string())));
    }

    #[test]
    fn test_every_builtin_parses() {
        for builtin in builtin_commands() {
            let parsed = Command::parse(builtin.usage.replace("<message>", "x").as_str());
            assert!(
                !matches!(parsed, None | Some(Command::Unknown(_))),
                "{} did not parse",
                builtin.name
            );
        }
    }
}
