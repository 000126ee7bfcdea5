//! Command interpreter.
//!
//! Turns one input line into output lines, session mutations and an optional
//! [`Signal`] for the front-end. The session lock is only ever held for short
//! synchronous sections, never across a gateway call, so the challenge clock
//! keeps ticking while a request is in flight.

use crate::challenge_generator::{ChallengeRoll, Verdict, parse_challenge};
use crate::prompts;
use codecrt_core::era::{Era, is_blank_or_placeholder};
use codecrt_core::gateway::{CompletionGateway, ExecutionGateway, ExecutionOutcome, ExecutionRequest};
use codecrt_core::session::{ErrorContext, GeneratedCode, OutputLine, Resolution, Session};
use codecrt_core::text::{number_lines, strip_code_fences};
use codecrt_core::Command;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::sync::{Mutex, watch};

/// The session shared between the interpreter, the clock and the front-end.
pub type SharedSession = Arc<Mutex<Session>>;

const DEBUG_HINT: &str = "💡 Type 'debug' to let AI fix this error!";
const BOX_TOP: &str = "┌─────────────────────────────────────┐";
const BOX_BOTTOM: &str = "└─────────────────────────────────────┘";

/// Side effect the caller must carry out after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// Discard the output log
    Clear,
    /// Power off and return to the boot screen
    Halt,
    Matrix,
    /// Run the three-era evolution on this source
    Evolve { source: String },
    /// Write `contents` to a file called `filename`
    Export { filename: String, contents: String },
}

/// Everything one command produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandOutcome {
    pub lines: Vec<OutputLine>,
    pub signal: Option<Signal>,
}

impl CommandOutcome {
    fn lines(lines: Vec<OutputLine>) -> Self {
        Self { lines, signal: None }
    }

    fn with_signal(lines: Vec<OutputLine>, signal: Signal) -> Self {
        Self {
            lines,
            signal: Some(signal),
        }
    }
}

/// Lowers the busy flag when dropped.
struct BusyGuard<'a> {
    busy: &'a watch::Sender<bool>,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.busy.send_replace(false);
    }
}

pub struct CommandInterpreter {
    execution: Arc<dyn ExecutionGateway>,
    completion: Arc<dyn CompletionGateway>,
    rng: std::sync::Mutex<StdRng>,
    busy: watch::Sender<bool>,
}

impl CommandInterpreter {
    pub fn new(execution: Arc<dyn ExecutionGateway>, completion: Arc<dyn CompletionGateway>) -> Self {
        let (busy, _) = watch::channel(false);
        Self {
            execution,
            completion,
            rng: std::sync::Mutex::new(StdRng::from_entropy()),
            busy,
        }
    }

    /// Makes challenge rolls reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = std::sync::Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    /// Receiver that is `true` while a gateway call is in flight.
    pub fn subscribe_busy(&self) -> watch::Receiver<bool> {
        self.busy.subscribe()
    }

    pub fn is_busy(&self) -> bool {
        *self.busy.borrow()
    }

    fn mark_busy(&self) -> BusyGuard<'_> {
        self.busy.send_replace(true);
        BusyGuard { busy: &self.busy }
    }

    fn roll_challenge(&self) -> ChallengeRoll {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        ChallengeRoll::roll(&mut *rng)
    }

    /// Interprets one raw input line against `session`.
    pub async fn interpret(&self, raw: &str, session: &SharedSession) -> CommandOutcome {
        let Some(command) = Command::parse(raw) else {
            return CommandOutcome::default();
        };
        tracing::debug!("[Interpreter] {:?}", command);

        match command {
            Command::Help => CommandOutcome::lines(self.help(session).await),
            Command::Clear => CommandOutcome::with_signal(Vec::new(), Signal::Clear),
            Command::Toggle => CommandOutcome::lines(self.toggle(session).await),
            Command::Time => CommandOutcome::lines(vec![OutputLine::output(
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            )]),
            Command::Run => CommandOutcome::lines(self.run(session).await),
            Command::Debug => CommandOutcome::lines(self.debug(session).await),
            Command::Explain => CommandOutcome::lines(self.explain(session).await),
            Command::Insert => CommandOutcome::lines(self.insert(session).await),
            Command::Evolve => self.evolve(session).await,
            Command::Exit => {
                CommandOutcome::with_signal(vec![OutputLine::error("SYSTEM HALTED")], Signal::Halt)
            }
            Command::Hello => {
                let mode = session.lock().await.mode();
                CommandOutcome::lines(hello_lines(mode))
            }
            Command::Coffee => CommandOutcome::lines(vec![
                OutputLine::system("☕ Brewing coffee..."),
                OutputLine::error("ERROR: PC LOAD LETTER"),
            ]),
            Command::Hack => CommandOutcome::lines(vec![
                OutputLine::success("ACCESS GRANTED"),
                OutputLine::code("01001000 01000001 01000011 01001011"),
            ]),
            Command::Matrix => CommandOutcome::with_signal(
                vec![
                    OutputLine::success("🟢 ENTERING THE MATRIX..."),
                    OutputLine::system("Wake up, Neo..."),
                    OutputLine::system("The Matrix has you..."),
                    OutputLine::system("Follow the white rabbit."),
                    OutputLine::blank(),
                    OutputLine::system("Press ESC to exit the Matrix"),
                ],
                Signal::Matrix,
            ),
            Command::Challenge => CommandOutcome::lines(self.challenge(session).await),
            Command::Submit => CommandOutcome::lines(self.submit(session).await),
            Command::GiveUp => CommandOutcome::lines(self.give_up(session).await),
            Command::Export => self.export(session).await,
            Command::Ai(request) => CommandOutcome::lines(self.ai(&request, session).await),
            Command::Unknown(cmd) => CommandOutcome::lines(vec![OutputLine::error(format!(
                "Unknown command: {cmd}. Type \"help\" for available commands."
            ))]),
        }
    }

    async fn help(&self, session: &SharedSession) -> Vec<OutputLine> {
        let mode = session.lock().await.mode();
        help_lines(mode)
    }

    async fn toggle(&self, session: &SharedSession) -> Vec<OutputLine> {
        let era = session.lock().await.toggle_mode();
        tracing::info!("[Interpreter] Mode switched to {}", era);
        vec![
            OutputLine::system(format!("Switched to {era} mode")),
            OutputLine::system(format!("Language: {}", era.language())),
        ]
    }

    async fn run(&self, session: &SharedSession) -> Vec<OutputLine> {
        let (code, language_id) = {
            let s = session.lock().await;
            (s.editor_text().to_string(), s.execution_id())
        };
        if code.trim().is_empty() {
            return vec![OutputLine::error("Error: No code to execute")];
        }

        let result = {
            let _busy = self.mark_busy();
            self.execution
                .execute(ExecutionRequest {
                    source: code.clone(),
                    language_id,
                })
                .await
        };

        let result = match result {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("[Interpreter] run failed: {}", e);
                return vec![OutputLine::error(format!("Execution error: {e}"))];
            }
        };

        let outcome = result.outcome();
        let lines = run_outcome_lines(&outcome);

        let mut s = session.lock().await;
        match outcome.diagnostic() {
            Some(diagnostic) => s.record_execution_error(code, diagnostic),
            None => s.clear_execution_error(),
        }
        lines
    }

    async fn debug(&self, session: &SharedSession) -> Vec<OutputLine> {
        let (code, diagnostic, era) = {
            let s = session.lock().await;
            match s.error_context() {
                ErrorContext::None => {
                    return vec![
                        OutputLine::success("No errors detected!"),
                        OutputLine::system("💡 Run code first to capture errors"),
                    ];
                }
                ErrorContext::Stale => {
                    return vec![
                        OutputLine::error("⚠️  Code has changed since last error"),
                        OutputLine::system("💡 Run the code again to get current errors"),
                    ];
                }
                ErrorContext::Current(diagnostic) => {
                    (s.editor_text().to_string(), diagnostic.to_string(), s.mode())
                }
            }
        };

        let mut lines = vec![
            OutputLine::system("🔧 AI Debugger analyzing error..."),
            OutputLine::blank(),
        ];

        let reply = {
            let _busy = self.mark_busy();
            self.completion
                .complete(prompts::debug_fix(era.profile(), &code, &diagnostic))
                .await
        };
        let fixed = match reply {
            Ok(reply) => strip_code_fences(&reply),
            Err(e) => {
                lines.push(OutputLine::error(format!("Debug Error: {e}")));
                return lines;
            }
        };

        lines.push(OutputLine::system(BOX_TOP));
        lines.push(OutputLine::system(format!("🛠️  Fixed {} Code:", era.language())));
        lines.push(OutputLine::system(BOX_BOTTOM));
        lines.extend(number_lines(&fixed).into_iter().map(OutputLine::code));
        lines.push(OutputLine::system(BOX_TOP));
        lines.push(OutputLine::success("✅ Fixed code ready!"));
        lines.push(OutputLine::success("💾 Type \"insert\" to replace editor code"));
        lines.push(OutputLine::system("🚀 Or type \"run\" to test the fix"));

        let mut s = session.lock().await;
        s.stage_generated(GeneratedCode::new(fixed, era));
        s.clear_execution_error();
        lines
    }

    async fn explain(&self, session: &SharedSession) -> Vec<OutputLine> {
        let (code, era) = {
            let s = session.lock().await;
            (s.editor_text().to_string(), s.mode())
        };
        if is_blank_or_placeholder(&code) {
            return vec![
                OutputLine::error("Error: No code to explain!"),
                OutputLine::system("💡 Write some code first, or use 'ai' to generate code"),
            ];
        }

        let persona = era.profile().persona_name;
        let mut lines = vec![
            OutputLine::system(format!("🔍 {persona} analyzing code...")),
            OutputLine::blank(),
        ];

        let reply = {
            let _busy = self.mark_busy();
            self.completion.complete(prompts::explanation(era.profile(), &code)).await
        };
        match reply {
            Ok(explanation) => {
                let voice = |text: String| match era {
                    Era::Era2025 => OutputLine::ai(text),
                    _ => OutputLine::success(text),
                };
                lines.push(OutputLine::blank());
                lines.push(voice(format!("💬 {persona}:")));
                lines.push(OutputLine::blank());
                lines.push(voice(explanation));
                lines.push(OutputLine::blank());
            }
            Err(e) => lines.push(OutputLine::error(format!("Explanation Error: {e}"))),
        }
        lines
    }

    async fn insert(&self, session: &SharedSession) -> Vec<OutputLine> {
        let mut s = session.lock().await;
        let previous = s.mode();
        match s.insert_staged() {
            Some(generated) => {
                let mut lines = vec![OutputLine::success("Code inserted into editor!")];
                if generated.era != previous {
                    lines.push(OutputLine::system(format!(
                        "Switched to {} mode ({})",
                        generated.era,
                        generated.language()
                    )));
                }
                lines
            }
            None => vec![OutputLine::error("No code to insert. Use 'ai' command first.")],
        }
    }

    async fn evolve(&self, session: &SharedSession) -> CommandOutcome {
        let code = session.lock().await.editor_text().to_string();
        if is_blank_or_placeholder(&code) {
            return CommandOutcome::lines(vec![
                OutputLine::error("Error: Write some code first before using 'evolve'"),
                OutputLine::system("💡 Try: ai create a calculator"),
                OutputLine::system("💡 Then: evolve"),
            ]);
        }
        CommandOutcome::with_signal(
            vec![
                OutputLine::system("🚀 Initializing Code Time Machine..."),
                OutputLine::system("⏳ Traveling: 1972(C) → 1985(C++) → 2025(Python)"),
                OutputLine::blank(),
            ],
            Signal::Evolve { source: code },
        )
    }

    async fn challenge(&self, session: &SharedSession) -> Vec<OutputLine> {
        let era = session.lock().await.mode();
        let roll = self.roll_challenge();

        let mut lines = vec![
            OutputLine::system("🎯 Generating random coding challenge..."),
            OutputLine::system("🎲 Rolling the dice..."),
            OutputLine::blank(),
            OutputLine::system(format!(
                "{} Selected: {} - {}",
                roll.difficulty.emoji(),
                roll.difficulty,
                roll.category_label()
            )),
            OutputLine::system("⏳ AI crafting unique challenge..."),
            OutputLine::blank(),
        ];

        let reply = {
            let _busy = self.mark_busy();
            self.completion
                .complete(prompts::challenge(
                    era.profile(),
                    roll.category,
                    roll.difficulty,
                    roll.time_limit,
                ))
                .await
        };
        match reply {
            Ok(reply) => {
                let challenge = parse_challenge(&reply, &roll, era.language());
                lines.extend(challenge.announcement());
                session.lock().await.start_challenge(challenge);
            }
            Err(e) => lines.push(OutputLine::error(format!("Challenge Error: {e}"))),
        }
        lines
    }

    async fn submit(&self, session: &SharedSession) -> Vec<OutputLine> {
        let (ticket, challenge, code, era) = {
            let mut s = session.lock().await;
            if s.challenge().is_none() {
                return vec![
                    OutputLine::error("❌ No active challenge!"),
                    OutputLine::system("💡 Type 'challenge' to start one"),
                ];
            }
            let code = s.editor_text().to_string();
            if code.trim().is_empty() {
                return vec![
                    OutputLine::error("❌ No code to submit!"),
                    OutputLine::system("💡 Write your solution in the editor first"),
                ];
            }
            let Some(ticket) = s.begin_attempt() else {
                return Vec::new();
            };
            let Some(challenge) = s.challenge().cloned() else {
                return Vec::new();
            };
            (ticket, challenge, code, s.mode())
        };
        tracing::info!("[Interpreter] Submission attempt #{} for {}", ticket.attempt, ticket.challenge_id);

        let mut lines = vec![
            OutputLine::blank(),
            OutputLine::system(format!("📤 ATTEMPT #{} - Submitting solution...", ticket.attempt)),
            OutputLine::blank(),
            OutputLine::system("▶️  Executing code..."),
        ];

        let _busy = self.mark_busy();
        let result = self
            .execution
            .execute(ExecutionRequest {
                source: code.clone(),
                language_id: era.execution_id(),
            })
            .await;
        let result = match result {
            Ok(result) => result,
            Err(e) => {
                session.lock().await.end_attempt(ticket.challenge_id);
                lines.push(OutputLine::error(format!("Submission Error: {e}")));
                return lines;
            }
        };

        let output = match result.outcome() {
            ExecutionOutcome::CompileError(diagnostic) => {
                lines.push(OutputLine::error("❌ Compilation Error:"));
                lines.push(OutputLine::error(diagnostic));
                None
            }
            ExecutionOutcome::RuntimeError(diagnostic) => {
                lines.push(OutputLine::error("❌ Runtime Error:"));
                lines.push(OutputLine::error(diagnostic));
                None
            }
            ExecutionOutcome::Output { stdout, .. } => {
                lines.push(OutputLine::success("✅ Code executed successfully"));
                lines.push(OutputLine::system("Output:"));
                lines.push(OutputLine::code(stdout.clone()));
                Some(stdout)
            }
            ExecutionOutcome::StatusFailure(_) | ExecutionOutcome::NoOutput => {
                lines.push(OutputLine::error("⚠️  No output produced"));
                None
            }
        };
        let Some(output) = output else {
            lines.push(OutputLine::blank());
            lines.push(OutputLine::system("🔄 Fix the errors and submit again!"));
            session.lock().await.end_attempt(ticket.challenge_id);
            return lines;
        };

        lines.push(OutputLine::blank());
        lines.push(OutputLine::system("🔍 Verifying solution with AI..."));

        let reply = self
            .completion
            .complete(prompts::verification(&challenge, era.language(), &code, &output))
            .await;
        let reply = match reply {
            Ok(reply) => reply,
            Err(e) => {
                session.lock().await.end_attempt(ticket.challenge_id);
                lines.push(OutputLine::error(format!("Submission Error: {e}")));
                return lines;
            }
        };

        lines.push(OutputLine::blank());
        let mut s = session.lock().await;
        if !s.is_current_challenge(ticket.challenge_id) {
            tracing::info!("[Interpreter] Late verdict for {} discarded", ticket.challenge_id);
            lines.push(OutputLine::system(
                "⏰ That challenge already ended; the result was not counted",
            ));
            return lines;
        }
        match Verdict::parse(&reply) {
            Verdict::Correct(explanation) => {
                lines.push(OutputLine::success("┌────────────────────────────────────────────────"));
                lines.push(OutputLine::success("        🎉 CHALLENGE COMPLETED! ✅"));
                lines.push(OutputLine::success("└────────────────────────────────────────────────"));
                lines.push(OutputLine::blank());
                lines.push(OutputLine::ai(format!("🏆 {explanation}")));
                lines.push(OutputLine::success(format!("📊 Attempts: {}", ticket.attempt)));
                lines.push(OutputLine::blank());
                lines.extend(s.resolve_challenge(Some(ticket.challenge_id), Resolution::Solved));
            }
            Verdict::Incorrect(explanation) => {
                s.end_attempt(ticket.challenge_id);
                lines.push(OutputLine::error("❌ Solution is incorrect"));
                lines.push(OutputLine::blank());
                lines.push(OutputLine::system(format!("💡 {explanation}")));
                lines.push(OutputLine::blank());
                lines.push(OutputLine::system("🔄 Keep trying! You can submit again."));
            }
            Verdict::Partial(explanation) => {
                s.end_attempt(ticket.challenge_id);
                lines.push(OutputLine::error("⚠️  Partial solution"));
                lines.push(OutputLine::blank());
                lines.push(OutputLine::system(format!("💡 {explanation}")));
                lines.push(OutputLine::blank());
                lines.push(OutputLine::system("🔄 You're on the right track! Submit again."));
            }
            Verdict::Unrecognized(reply) => {
                tracing::warn!("[Interpreter] Unrecognized verdict: {}", reply);
                s.end_attempt(ticket.challenge_id);
                lines.push(OutputLine::error("⚠️  Could not determine verdict"));
                lines.push(OutputLine::system("🔄 Submit again to retry verification."));
            }
        }
        lines
    }

    async fn give_up(&self, session: &SharedSession) -> Vec<OutputLine> {
        let mut s = session.lock().await;
        if s.challenge().is_none() {
            return vec![
                OutputLine::error("❌ No active challenge to end"),
                OutputLine::system("💡 Type 'challenge' to start one!"),
            ];
        }
        s.resolve_challenge(None, Resolution::Abandoned)
    }

    async fn export(&self, session: &SharedSession) -> CommandOutcome {
        let (code, era) = {
            let s = session.lock().await;
            (s.editor_text().to_string(), s.mode())
        };
        if code.trim().is_empty() {
            return CommandOutcome::lines(vec![OutputLine::error("Error: No code to export")]);
        }

        let profile = era.profile();
        let filename = export_filename(chrono::Utc::now(), profile.file_extension);
        let lines = vec![
            OutputLine::success(format!("💾 Code exported as: {filename}")),
            OutputLine::system(format!("📄 File type: {}{}", profile.language, profile.file_extension)),
            OutputLine::system(format!(
                "📊 Size: {} bytes, {} lines",
                code.len(),
                code.split('\n').count()
            )),
        ];
        CommandOutcome::with_signal(
            lines,
            Signal::Export {
                filename,
                contents: code,
            },
        )
    }

    async fn ai(&self, request: &str, session: &SharedSession) -> Vec<OutputLine> {
        let (code, era) = {
            let s = session.lock().await;
            (s.editor_text().to_string(), s.mode())
        };
        let language = era.language();
        let mut lines = vec![OutputLine::system(format!("> AI generating {language} code..."))];

        let reply = {
            let _busy = self.mark_busy();
            self.completion
                .complete(prompts::code_generation(era.profile(), request, &code))
                .await
        };
        let generated = match reply {
            Ok(reply) => strip_code_fences(&reply),
            Err(e) => {
                lines.push(OutputLine::error(format!("AI Error: {e}")));
                return lines;
            }
        };

        lines.push(OutputLine::system(BOX_TOP));
        lines.push(OutputLine::system(format!("Generated {language} Code:")));
        lines.push(OutputLine::system(BOX_BOTTOM));
        lines.extend(number_lines(&generated).into_iter().map(OutputLine::code));
        lines.push(OutputLine::system(BOX_TOP));
        lines.push(OutputLine::success("💾 Type \"insert\" to add this code to the editor"));
        lines.push(OutputLine::success("🚀 Type \"evolve\" to see it through different eras!"));

        session.lock().await.stage_generated(GeneratedCode::new(generated, era));
        lines
    }
}

/// `codecrt_<YYYY-MM-DDTHH-MM-SS><ext>` in UTC.
pub fn export_filename(now: chrono::DateTime<chrono::Utc>, extension: &str) -> String {
    format!("codecrt_{}{}", now.format("%Y-%m-%dT%H-%M-%S"), extension)
}

fn run_outcome_lines(outcome: &ExecutionOutcome) -> Vec<OutputLine> {
    let failure = |header: String, body: Option<&str>| {
        let mut lines = vec![OutputLine::error(header)];
        if let Some(body) = body {
            lines.push(OutputLine::error(body));
        }
        lines.push(OutputLine::blank());
        lines.push(OutputLine::system(DEBUG_HINT));
        lines
    };

    match outcome {
        ExecutionOutcome::CompileError(diagnostic) => {
            failure("Compilation Error:".to_string(), Some(diagnostic.as_str()))
        }
        ExecutionOutcome::RuntimeError(diagnostic) => {
            failure("Runtime Error:".to_string(), Some(diagnostic.as_str()))
        }
        ExecutionOutcome::Output {
            stdout,
            failed_status: None,
        } => vec![OutputLine::success("Output:"), OutputLine::success(stdout)],
        ExecutionOutcome::Output {
            stdout,
            failed_status: Some(status),
        } => {
            let mut lines = vec![OutputLine::success("Output:"), OutputLine::success(stdout)];
            lines.extend(failure(format!("Execution Status: {status}"), None));
            lines
        }
        ExecutionOutcome::StatusFailure(status) => failure(format!("Execution Status: {status}"), None),
        ExecutionOutcome::NoOutput => vec![
            OutputLine::success("Code executed successfully (no output)"),
            OutputLine::system("💡 Tip: Add printf/cout/print statements to see output"),
        ],
    }
}

fn hello_lines(mode: Era) -> Vec<OutputLine> {
    let code: &[&str] = match mode {
        Era::Era1972 => &[
            "#include <stdio.h>",
            "int main() {",
            "    printf(\"Hello World!\\n\");",
            "    return 0;",
            "}",
        ],
        Era::Era1985 => &[
            "#include <iostream>",
            "int main() {",
            "    std::cout << \"Hello World!\" << std::endl;",
            "    return 0;",
            "}",
        ],
        Era::Era2025 => &["print('Hello, World!')"],
    };
    code.iter().map(|line| OutputLine::code(*line)).collect()
}

fn help_lines(mode: Era) -> Vec<OutputLine> {
    let language = mode.language();
    let entry = |text: &str| OutputLine::output(text);
    let note = |text: String| OutputLine::code(text);

    vec![
        OutputLine::blank(),
        OutputLine::system("╔═══════════════════════════════════════════════════════════╗"),
        OutputLine::system("║               CODECRT COMMAND REFERENCE v1.0               ║"),
        OutputLine::system("╚═══════════════════════════════════════════════════════════╝"),
        OutputLine::blank(),
        OutputLine::success("  SYSTEM COMMANDS:"),
        OutputLine::blank(),
        entry("    help             Show this help menu"),
        entry("    clear            Clear terminal output"),
        entry("    toggle           Switch: 1972(C) → 1985(C++) → 2025(Python)"),
        entry("    time             Display current date and time"),
        entry("    exit             Power off system"),
        OutputLine::blank(),
        OutputLine::success("  CODE EXECUTION:"),
        OutputLine::blank(),
        entry("    run              Execute code in the editor"),
        OutputLine::blank(),
        OutputLine::success("  AI COMMANDS:"),
        OutputLine::blank(),
        entry("    ai <message>     Ask AI to generate code"),
        note(format!("                     Current mode: {language}")),
        note("                     Example: ai create a calculator".to_string()),
        OutputLine::blank(),
        entry("    debug            Fix errors in current code with AI"),
        note("                     Run code first to capture errors!".to_string()),
        OutputLine::blank(),
        entry("    explain          AI explains what the code does"),
        note(format!("                     Era-appropriate explanation ({mode})")),
        OutputLine::blank(),
        entry("    insert           Insert last AI code into editor"),
        entry("    export           Save current code as file"),
        OutputLine::blank(),
        OutputLine::success("  🚀 TIME MACHINE:"),
        OutputLine::blank(),
        entry("    evolve           Watch code transform through history!"),
        note("                     1972:C → 1985:C++ → 2025:Python".to_string()),
        OutputLine::blank(),
        OutputLine::success("  🎮 EASTER EGGS:"),
        OutputLine::blank(),
        entry("    hello            Hello World in current era"),
        entry("    coffee           Coffee break"),
        entry("    matrix           Enter the Matrix... 🟢"),
        entry("    challenge        Speed coding challenge ⏱️"),
        entry("    submit           Submit solution for challenge"),
        note("                     (Can submit multiple times!)".to_string()),
        entry("    giveup           End active challenge"),
        note("                     (Shows solution)".to_string()),
        OutputLine::blank(),
        OutputLine::system("  ────────────────────────────────────────────────────────────"),
        OutputLine::success(format!(
            "  💡 TIP: You're in {mode} mode - AI generates {language} code!"
        )),
        OutputLine::system("  ────────────────────────────────────────────────────────────"),
        OutputLine::blank(),
    ]
}
