use std::borrow::Cow::{self, Borrowed, Owned};

use codecrt_core::command::builtin_commands;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// Front-end commands that never reach the interpreter.
pub const META_COMMANDS: &[(&str, &str)] = &[
    (":load", "Read a file into the editor"),
    (":show", "Print the editor contents"),
    (":edit", "Type new editor contents, end with a single '.'"),
    (":fossil", "Analyze a legacy source file"),
    (":adopt", "Take an evolution result into the editor"),
    (":help", "List front-end commands"),
    (":quit", "Leave CodeCRT"),
];

/// Completion, hints and highlighting for the command set.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    pub fn new() -> Self {
        let mut commands: Vec<String> = builtin_commands()
            .iter()
            .map(|cmd| cmd.name.to_string())
            .collect();
        commands.extend(META_COMMANDS.iter().map(|(name, _)| name.to_string()));
        Self { commands }
    }

    fn matching<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a String> {
        self.commands.iter().filter(move |cmd| cmd.starts_with(prefix))
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return Ok((0, vec![]));
        }

        let candidates = self
            .matching(line)
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let word = line.split_whitespace().next().unwrap_or_default();
        if word.starts_with(':') {
            Owned(line.bright_magenta().to_string())
        } else if self.commands.iter().any(|cmd| cmd.eq_ignore_ascii_case(word)) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if line.is_empty() || line.contains(' ') {
            return None;
        }
        self.matching(line)
            .find(|cmd| cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for CliHelper {}
