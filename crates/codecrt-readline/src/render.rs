//! Coloured rendering of output lines and the boot/matrix effects.

use std::io::Write;
use std::time::Duration;

use codecrt_core::era::Era;
use codecrt_core::session::{OutputKind, OutputLine};
use colored::{ColoredString, Colorize};
use rand::Rng;

pub const BOOT_SEQUENCE: &[&str] = &[
    "CODECRT SYSTEM v1.0",
    "Copyright (C) 1985-2025 RetroFuture Labs",
    "",
    "Initializing AI Coprocessor...",
    "Loading Neural Networks... OK",
    "Connecting to Grok Code Fast 1... OK",
    "Connecting to Piston Code Runner... OK",
    "Calibrating Flux Capacitor... OK",
    "",
    "READY.",
    "Type \"help\" for available commands",
    "",
];

const BOOT_LINE_DELAY: Duration = Duration::from_millis(200);
const MATRIX_GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789@#$%^&*(){}[]<>/\\|";
const MATRIX_ROWS: usize = 24;
const MATRIX_WIDTH: usize = 64;

fn paint(line: &OutputLine, mode: Era) -> ColoredString {
    let text = line.text.as_str();
    match line.kind {
        OutputKind::Command => text.bright_white().bold(),
        OutputKind::Output => match mode {
            Era::Era1972 => text.green(),
            Era::Era1985 => text.yellow(),
            Era::Era2025 => text.normal(),
        },
        OutputKind::System => text.bright_black(),
        OutputKind::Error => text.red(),
        OutputKind::Success => text.bright_green(),
        OutputKind::Code => text.cyan(),
        OutputKind::Ai => text.bright_magenta(),
    }
}

pub fn print_lines(lines: &[OutputLine], mode: Era) {
    for line in lines {
        println!("{}", paint(line, mode));
    }
}

/// Prints the boot banner one line at a time.
pub async fn boot(animate: bool) {
    for line in BOOT_SEQUENCE {
        println!("{}", line.bright_green());
        if animate {
            tokio::time::sleep(BOOT_LINE_DELAY).await;
        }
    }
}

pub fn reboot_notice() {
    println!("{}", "Rebooting...".bright_black());
    println!();
}

pub fn clear_screen() {
    print!("\x1B[2J\x1B[H");
    let _ = std::io::stdout().flush();
}

fn matrix_row() -> String {
    let mut rng = rand::thread_rng();
    (0..MATRIX_WIDTH)
        .map(|_| {
            if rng.gen_bool(0.3) {
                MATRIX_GLYPHS[rng.gen_range(0..MATRIX_GLYPHS.len())] as char
            } else {
                ' '
            }
        })
        .collect()
}

/// A few frames of falling glyphs.
pub async fn matrix() {
    for _ in 0..MATRIX_ROWS {
        println!("{}", matrix_row().bright_green());
        let _ = std::io::stdout().flush();
        tokio::time::sleep(Duration::from_millis(33)).await;
    }
}

/// Prompt text, e.g. `[1972:C]> ` or `[2025:Python ⏱ 95s]> `.
pub fn prompt(mode: Era, remaining: Option<u32>) -> String {
    match remaining {
        Some(seconds) => format!("[{}:{} ⏱ {}s]> ", mode, mode.language(), seconds),
        None => format!("[{}:{}]> ", mode, mode.language()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_shows_era_and_language() {
        assert_eq!(prompt(Era::Era1972, None), "[1972:C]> ");
        assert_eq!(prompt(Era::Era1985, None), "[1985:C++]> ");
    }

    #[test]
    fn test_prompt_shows_challenge_time() {
        assert_eq!(prompt(Era::Era2025, Some(95)), "[2025:Python ⏱ 95s]> ");
    }
}
