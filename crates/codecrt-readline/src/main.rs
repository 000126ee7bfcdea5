//! CodeCRT terminal REPL.
//!
//! # Configuration
//!
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`OPENROUTER_*`, `CODECRT_*`)
//! 3. `~/.config/codecrt/config.toml`
//! 4. Default values
//!
//! The API key is read from `~/.config/codecrt/secret.json` first and
//! `OPENROUTER_API_KEY` second.

mod helper;
mod render;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use codecrt_core::era::Era;
use codecrt_core::gateway::CompletionGateway;
use codecrt_core::session::{GeneratedCode, OutputLine, Session};
use codecrt_core::text::number_lines;
use codecrt_infrastructure::storage::ConfigStorage;
use codecrt_infrastructure::{CodecrtPaths, ExportWriter};
use codecrt_interaction::clock::{ChallengeClock, TICK_PERIOD};
use codecrt_interaction::fossil_analyzer::report_lines;
use codecrt_interaction::{
    CommandInterpreter, EvolutionRunner, EvolutionStep, FossilAnalyzer, OpenRouterApiAgent,
    PistonApiAgent, SharedSession, Signal, Terminal,
};

use helper::{CliHelper, META_COMMANDS};

const DEFAULT_LOG_FILTER: &str = "codecrt=info";
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// CodeCRT - retro-futuristic coding terminal
#[derive(Parser, Debug)]
#[command(name = "codecrt")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config.toml (defaults to ~/.config/codecrt/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Starting era: 1972, 1985 or 2025
    #[arg(short, long)]
    mode: Option<Era>,

    /// Completion model id (overrides config and secret.json)
    #[arg(long)]
    model: Option<String>,

    /// Skip the boot animation
    #[arg(long)]
    no_boot: bool,

    /// Debug-level file logging
    #[arg(short, long)]
    debug: bool,
}

/// Installs the file logger. Returns `None` when no log directory is available.
fn init_logging(debug: bool) -> Option<WorkerGuard> {
    let dir = CodecrtPaths::logs_dir().ok()?;
    std::fs::create_dir_all(&dir).ok()?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, "codecrt.log"));
    let filter = if debug {
        EnvFilter::new("codecrt=debug,hyper=warn,reqwest=warn,rustyline=warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };
    let file_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(file_layer.with_filter(filter))
        .init();
    Some(guard)
}

/// Spinner shown while the interpreter waits on a gateway.
fn spawn_busy_indicator(mut busy: watch::Receiver<bool>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while busy.changed().await.is_ok() {
            if !*busy.borrow_and_update() {
                continue;
            }
            let mut frames = SPINNER.iter().cycle();
            let mut ticker = tokio::time::interval(Duration::from_millis(120));
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if let Some(frame) = frames.next() {
                            eprint!("\r{} {}", frame.bright_cyan(), "PROCESSING...".bright_black());
                            let _ = std::io::stderr().flush();
                        }
                    }
                    changed = busy.changed() => {
                        if changed.is_err() || !*busy.borrow_and_update() {
                            eprint!("\r{}\r", " ".repeat(24));
                            let _ = std::io::stderr().flush();
                            break;
                        }
                    }
                }
            }
        }
    })
}

/// Prints challenge timeouts as soon as the clock reports them.
fn spawn_clock_printer(
    session: SharedSession,
    mut rx: mpsc::UnboundedReceiver<Vec<OutputLine>>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(lines) = rx.recv().await {
            let mode = session.lock().await.mode();
            println!();
            render::print_lines(&lines, mode);
        }
    })
}

/// Editor era implied by a file's extension, if any.
fn era_for_path(path: &Path) -> Option<Era> {
    let ext = format!(".{}", path.extension()?.to_str()?.to_ascii_lowercase());
    Era::timeline().find(|era| era.profile().file_extension == ext)
}

enum Flow {
    Continue,
    Quit,
}

struct Repl {
    terminal: Terminal,
    completion: Arc<dyn CompletionGateway>,
    export: ExportWriter,
    evolution: Vec<EvolutionStep>,
    animate_boot: bool,
}

impl Repl {
    async fn mode(&self) -> Era {
        self.terminal.session().lock().await.mode()
    }

    async fn prompt(&self) -> String {
        let s = self.terminal.session().lock().await;
        render::prompt(s.mode(), s.challenge().map(|c| c.remaining_seconds))
    }

    /// Prints front-end lines and keeps them in the session log.
    async fn emit(&self, lines: Vec<OutputLine>) {
        render::print_lines(&lines, self.mode().await);
        self.terminal.record(&lines).await;
    }

    async fn handle_command(&mut self, line: &str) {
        let outcome = self.terminal.submit(line).await;
        let mode = self.mode().await;
        render::print_lines(&outcome.lines, mode);

        match outcome.signal {
            None => {}
            Some(Signal::Clear) => render::clear_screen(),
            Some(Signal::Halt) => {
                render::reboot_notice();
                render::boot(self.animate_boot).await;
            }
            Some(Signal::Matrix) => render::matrix().await,
            Some(Signal::Evolve { source }) => self.evolve(&source).await,
            Some(Signal::Export { filename, contents }) => {
                let line = match self.export.write(&filename, &contents) {
                    Ok(path) => OutputLine::system(format!("📁 Saved to {}", path.display())),
                    Err(e) => OutputLine::error(format!("Export Error: {e}")),
                };
                self.emit(vec![line]).await;
            }
        }
    }

    async fn evolve(&mut self, source: &str) {
        let runner = EvolutionRunner::new(Arc::clone(&self.completion));
        let mut shown = Vec::new();
        let result = runner
            .run(source, |step| {
                let lines = step.lines();
                render::print_lines(&lines, step.era);
                shown.extend(lines);
            })
            .await;
        self.terminal.record(&shown).await;

        let lines = match result {
            Ok(steps) => {
                self.evolution = steps;
                vec![
                    OutputLine::blank(),
                    OutputLine::success("✨ Evolution complete!"),
                    OutputLine::system("💡 Type ':adopt <year>' to load a version into the editor"),
                ]
            }
            Err(e) => vec![OutputLine::error(format!("Evolution Error: {e}"))],
        };
        self.emit(lines).await;
    }

    async fn handle_meta(&mut self, rl: &mut Editor<CliHelper, DefaultHistory>, line: &str) -> Flow {
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        match name {
            ":quit" | ":q" => return Flow::Quit,
            ":help" => {
                let lines: Vec<OutputLine> = META_COMMANDS
                    .iter()
                    .map(|(name, description)| OutputLine::output(format!("    {name:<12} {description}")))
                    .collect();
                render::print_lines(&lines, self.mode().await);
            }
            ":show" => {
                let code = self.terminal.session().lock().await.editor_text().to_string();
                let lines: Vec<OutputLine> = number_lines(&code).into_iter().map(OutputLine::code).collect();
                render::print_lines(&lines, self.mode().await);
            }
            ":load" => self.load(arg).await,
            ":edit" => self.edit(rl).await,
            ":fossil" => self.fossil(arg).await,
            ":adopt" => self.adopt(arg).await,
            other => {
                self.emit(vec![OutputLine::error(format!(
                    "Unknown front-end command: {other}. Type \":help\" for the list."
                ))])
                .await
            }
        }
        Flow::Continue
    }

    async fn load(&self, arg: &str) {
        if arg.is_empty() {
            self.emit(vec![OutputLine::error("Usage: :load <path>")]).await;
            return;
        }
        let path = PathBuf::from(arg);
        let code = match std::fs::read_to_string(&path) {
            Ok(code) => code,
            Err(e) => {
                self.emit(vec![OutputLine::error(format!("Load Error: {e}"))]).await;
                return;
            }
        };

        let mut lines = vec![OutputLine::success(format!(
            "📂 Loaded {} ({} lines)",
            path.display(),
            code.lines().count()
        ))];
        {
            let mut s = self.terminal.session().lock().await;
            s.set_editor_text(code);
            if let Some(era) = era_for_path(&path).filter(|era| *era != s.mode()) {
                s.set_mode(era);
                lines.push(OutputLine::system(format!("Switched to {era} mode ({})", era.language())));
            }
        }
        self.emit(lines).await;
    }

    async fn edit(&self, rl: &mut Editor<CliHelper, DefaultHistory>) {
        println!("{}", "Enter code, finish with a single '.' on its own line".bright_black());
        let mut buffer = Vec::new();
        loop {
            match rl.readline("... ") {
                Ok(line) if line.trim_end() == "." => break,
                Ok(line) => buffer.push(line),
                Err(_) => {
                    self.emit(vec![OutputLine::error("Edit cancelled")]).await;
                    return;
                }
            }
        }
        let count = buffer.len();
        self.terminal.session().lock().await.set_editor_text(buffer.join("\n"));
        self.emit(vec![OutputLine::success(format!("✏️  Editor updated ({count} lines)"))])
            .await;
    }

    async fn fossil(&self, arg: &str) {
        if arg.is_empty() {
            self.emit(vec![OutputLine::error("Usage: :fossil <path>")]).await;
            return;
        }
        let path = PathBuf::from(arg);
        let code = match std::fs::read_to_string(&path) {
            Ok(code) => code,
            Err(e) => {
                self.emit(vec![OutputLine::error(format!("Load Error: {e}"))]).await;
                return;
            }
        };
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| arg.to_string());

        self.emit(vec![OutputLine::system(format!("🦴 Excavating {filename}..."))])
            .await;
        let analyzer = FossilAnalyzer::new(Arc::clone(&self.completion));
        let report = match analyzer.analyze(&code, &filename).await {
            Ok(report) => report,
            Err(e) => {
                self.emit(vec![OutputLine::error(format!("Fossil Error: {e}"))]).await;
                return;
            }
        };

        let mut lines = report_lines(&report);
        if !report.modern_code.trim().is_empty() {
            self.terminal
                .session()
                .lock()
                .await
                .stage_generated(GeneratedCode::new(report.modern_code.clone(), Era::Era2025));
            lines.push(OutputLine::success(
                "💾 Type \"insert\" to load the modern translation into the editor",
            ));
        }
        self.emit(lines).await;
    }

    async fn adopt(&self, arg: &str) {
        let Ok(era) = arg.parse::<Era>() else {
            self.emit(vec![OutputLine::error("Usage: :adopt <1972|1985|2025>")]).await;
            return;
        };
        let Some(step) = self.evolution.iter().find(|step| step.era == era) else {
            self.emit(vec![
                OutputLine::error(format!("No evolution result for {era}.")),
                OutputLine::system("💡 Run 'evolve' first"),
            ])
            .await;
            return;
        };

        {
            let mut s = self.terminal.session().lock().await;
            s.set_editor_text(step.code.clone());
            s.set_mode(era);
        }
        self.emit(vec![OutputLine::success(format!(
            "Adopted the {era} version ({})",
            era.language()
        ))])
        .await;
    }
}

fn history_path(configured: Option<&str>) -> Option<PathBuf> {
    configured
        .map(PathBuf::from)
        .or_else(|| CodecrtPaths::history_file().ok())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging(args.debug);

    // ===== Configuration =====
    let storage = match &args.config {
        Some(path) => ConfigStorage::with_path(path.clone()),
        None => ConfigStorage::new().context("locating config.toml")?,
    };
    let config = storage.load_with_env().context("loading configuration")?;
    if let Err(e) = CodecrtPaths::ensure_secret_file() {
        tracing::warn!("[Main] Could not create secret.json template: {}", e);
    }

    // ===== Gateways =====
    let mut completion = OpenRouterApiAgent::from_config(&config.completion);
    if let Some(model) = args.model.clone() {
        completion = completion.with_model(model);
    }
    let has_credentials = completion.has_credentials();
    tracing::info!("[Main] Completion model: {}", completion.model());
    let completion: Arc<dyn CompletionGateway> = Arc::new(completion);
    let execution = Arc::new(PistonApiAgent::from_config(&config.execution));

    let interpreter = Arc::new(CommandInterpreter::new(execution, Arc::clone(&completion)));
    let mode = args.mode.unwrap_or(config.terminal.start_mode);
    let terminal = Terminal::new(Arc::clone(&interpreter), Session::new(mode));

    // ===== Background tasks =====
    let (clock_tx, clock_rx) = mpsc::unbounded_channel();
    let clock = ChallengeClock::spawn(Arc::clone(terminal.session()), TICK_PERIOD, clock_tx);
    let printer = spawn_clock_printer(Arc::clone(terminal.session()), clock_rx);
    let spinner = spawn_busy_indicator(interpreter.subscribe_busy());

    let mut repl = Repl {
        terminal,
        completion,
        export: ExportWriter::current_dir()?,
        evolution: Vec::new(),
        animate_boot: !args.no_boot,
    };

    // ===== REPL Setup =====
    let mut rl = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));
    let history = history_path(config.terminal.history_file.as_deref());
    if let Some(path) = &history {
        let _ = rl.load_history(path);
    }

    render::boot(repl.animate_boot).await;
    if !has_credentials {
        let secret = CodecrtPaths::secret_file()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| "secret.json".to_string());
        println!(
            "{}",
            format!("⚠️  No OpenRouter API key. Add it to {secret} or set OPENROUTER_API_KEY.").yellow()
        );
        println!();
    }

    // ===== Main REPL Loop =====
    loop {
        let prompt = repl.prompt().await;
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                if trimmed.starts_with(':') {
                    if let Flow::Quit = repl.handle_meta(&mut rl, trimmed).await {
                        break;
                    }
                    continue;
                }
                repl.handle_command(trimmed).await;
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type ':quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("{}", format!("Error: {err:?}").red());
                break;
            }
        }
    }

    if let Some(path) = &history {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = rl.save_history(path) {
            tracing::warn!("[Main] Could not save history: {}", e);
        }
    }

    clock.abort();
    printer.abort();
    spinner.abort();
    println!("{}", "Goodbye!".bright_green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_era_for_path() {
        assert_eq!(era_for_path(Path::new("hello.c")), Some(Era::Era1972));
        assert_eq!(era_for_path(Path::new("src/Main.CPP")), Some(Era::Era1985));
        assert_eq!(era_for_path(Path::new("script.py")), Some(Era::Era2025));
        assert_eq!(era_for_path(Path::new("legacy.cob")), None);
        assert_eq!(era_for_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_args_parse_mode() {
        let args = Args::parse_from(["codecrt", "--mode", "1985", "--no-boot"]);
        assert_eq!(args.mode, Some(Era::Era1985));
        assert!(args.no_boot);
    }
}
