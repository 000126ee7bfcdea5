mod common;

use codecrt_core::era::Era;
use codecrt_core::session::{Challenge, Difficulty, OutputKind, Session};
use codecrt_core::CodecrtError;
use codecrt_interaction::clock::ChallengeClock;
use codecrt_interaction::{CommandInterpreter, EvolutionRunner, Terminal};
use common::*;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::test]
async fn test_submit_echoes_and_appends() {
    let (exec, comp) = (ScriptedExecution::new(), ScriptedCompletion::new());
    let terminal = Terminal::new(Arc::new(interpreter(&exec, &comp)), Session::default());

    terminal.submit("  toggle  ").await;

    let s = terminal.session().lock().await;
    let log = s.output_log();
    assert_eq!(log[0].text, "> toggle");
    assert_eq!(log[0].kind, OutputKind::Command);
    assert_eq!(log.len(), 3);
}

#[tokio::test]
async fn test_echo_precedes_timeout_during_submit() {
    let exec = ScriptedExecution::new();
    let gate = GatedCompletion::new("CORRECT - prints 5");
    let interp = Arc::new(CommandInterpreter::new(exec.clone(), gate.clone()));
    let mut session = Session::new(Era::Era2025).with_editor_text("print(5)");
    session.start_challenge(Challenge::new(
        "Print 5",
        None,
        Difficulty::Easy,
        1,
        "print(5)",
        "Python",
    ));
    let terminal = Arc::new(Terminal::new(interp, session));
    exec.push_stdout("5");

    let task = {
        let terminal = Arc::clone(&terminal);
        tokio::spawn(async move { terminal.submit("submit").await })
    };

    gate.entered.notified().await;
    {
        // What the clock does on its last tick
        let mut s = terminal.session().lock().await;
        let reveal = s.tick();
        s.append_output(reveal);
    }
    gate.release.notify_one();
    task.await.expect("submit task");

    let s = terminal.session().lock().await;
    let log = s.output_log();
    let echo = log.iter().position(|l| l.text == "> submit").expect("echo");
    let timeout = log.iter().position(|l| l.text == "⏰ TIME'S UP!").expect("timeout");
    assert_eq!(echo, 0);
    assert!(echo < timeout);
}

#[tokio::test]
async fn test_clear_empties_log() {
    let (exec, comp) = (ScriptedExecution::new(), ScriptedCompletion::new());
    let terminal = Terminal::new(Arc::new(interpreter(&exec, &comp)), Session::default());

    terminal.submit("hello").await;
    terminal.submit("coffee").await;
    assert!(!terminal.session().lock().await.output_log().is_empty());

    terminal.submit("clear").await;
    assert!(terminal.session().lock().await.output_log().is_empty());
}

#[tokio::test]
async fn test_blank_submit_leaves_log_untouched() {
    let (exec, comp) = (ScriptedExecution::new(), ScriptedCompletion::new());
    let terminal = Terminal::new(Arc::new(interpreter(&exec, &comp)), Session::default());

    terminal.submit("   ").await;
    assert!(terminal.session().lock().await.output_log().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_clock_reveals_once_on_timeout() {
    let mut session = Session::default();
    session.start_challenge(Challenge::new(
        "Print 5",
        None,
        Difficulty::Easy,
        2,
        "print(5)",
        "Python",
    ));
    let session = shared(session);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = ChallengeClock::spawn(Arc::clone(&session), Duration::from_secs(1), tx);

    let lines = rx.recv().await.expect("timeout lines");
    assert_eq!(
        lines.iter().filter(|l| l.text.contains("REFERENCE SOLUTION")).count(),
        1
    );
    assert!(session.lock().await.challenge().is_none());
    assert!(
        session
            .lock()
            .await
            .output_log()
            .iter()
            .any(|l| l.text == "⏰ TIME'S UP!")
    );

    // Further ticks with no challenge produce nothing
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(rx.try_recv().is_err());

    drop(rx);
    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(handle.is_finished());
}

#[tokio::test]
async fn test_evolution_runs_eras_in_order() {
    let comp = ScriptedCompletion::new();
    comp.push("```c\nint main() { return 0; }\n```");
    comp.push("int main() { return 0; }");
    comp.push("print('ok')");
    let runner = EvolutionRunner::new(comp.clone());

    let mut seen = Vec::new();
    let steps = runner
        .run("print('ok')", |step| seen.push(step.era))
        .await
        .expect("evolution");

    assert_eq!(seen, vec![Era::Era1972, Era::Era1985, Era::Era2025]);
    assert_eq!(steps[0].code, "int main() { return 0; }");
    assert!(steps[2].lines()[1].text.contains("2025"));
    assert_eq!(comp.calls(), 3);
}

#[tokio::test]
async fn test_evolution_stops_at_first_failure() {
    let comp = ScriptedCompletion::new();
    comp.push("int main() {}");
    comp.push_err(CodecrtError::http(500, "upstream down"));
    let runner = EvolutionRunner::new(comp.clone());

    let mut delivered = 0;
    let result = runner.run("x = 1", |_| delivered += 1).await;

    assert!(result.is_err());
    assert_eq!(delivered, 1);
    assert_eq!(comp.calls(), 2);
}
