//! Legacy-code archaeology.

use crate::prompts;
use codecrt_core::fossil::{FossilReport, Severity};
use codecrt_core::gateway::CompletionGateway;
use codecrt_core::session::OutputLine;
use codecrt_core::text::{number_lines, strip_code_fences};
use codecrt_core::Result;
use std::sync::Arc;

pub struct FossilAnalyzer {
    completion: Arc<dyn CompletionGateway>,
}

impl FossilAnalyzer {
    pub fn new(completion: Arc<dyn CompletionGateway>) -> Self {
        Self { completion }
    }

    pub async fn analyze(&self, code: &str, filename: &str) -> Result<FossilReport> {
        tracing::info!("[Fossil] Analyzing {} ({} bytes)", filename, code.len());
        let reply = self
            .completion
            .complete(prompts::fossil_analysis(code, filename))
            .await?;
        parse_report(&reply)
    }
}

/// Parses the model reply, tolerating a surrounding ```json fence.
pub fn parse_report(reply: &str) -> Result<FossilReport> {
    let cleaned = strip_code_fences(reply);
    Ok(serde_json::from_str(&cleaned)?)
}

fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "🔴",
        Severity::Medium => "🟡",
        Severity::Low => "🟢",
    }
}

/// Terminal rendering of a report.
pub fn report_lines(report: &FossilReport) -> Vec<OutputLine> {
    let mut lines = vec![
        OutputLine::blank(),
        OutputLine::system("┌────────────────────────────────────────────────┐"),
        OutputLine::success("           🦴 FOSSIL ANALYSIS REPORT 🦴"),
        OutputLine::system("└────────────────────────────────────────────────┘"),
        OutputLine::blank(),
        OutputLine::ai(format!("🗿 {} · {}", report.language, report.era)),
        OutputLine::system(format!(
            "📏 {} lines · complexity {}",
            report.lines_of_code, report.complexity
        )),
        OutputLine::blank(),
        OutputLine::output(report.summary.clone()),
    ];
    if !report.purpose.is_empty() {
        lines.push(OutputLine::output(format!("🎯 Purpose: {}", report.purpose)));
    }

    if !report.vulnerabilities.is_empty() {
        lines.push(OutputLine::blank());
        lines.push(OutputLine::error("⚠️  VULNERABILITIES:"));
        for v in &report.vulnerabilities {
            lines.push(OutputLine::error(format!(
                "  {} [{:?}] {}: {}",
                severity_icon(v.severity),
                v.severity,
                v.kind,
                v.description
            )));
            if !v.fix.is_empty() {
                lines.push(OutputLine::system(format!("      fix: {}", v.fix)));
            }
        }
    }

    if !report.historical_context.is_empty() {
        lines.push(OutputLine::blank());
        lines.push(OutputLine::success("📜 HISTORICAL CONTEXT:"));
        lines.push(OutputLine::output(report.historical_context.clone()));
    }
    if !report.migration_strategy.is_empty() {
        lines.push(OutputLine::blank());
        lines.push(OutputLine::success("🧭 MIGRATION STRATEGY:"));
        lines.push(OutputLine::output(report.migration_strategy.clone()));
    }
    if !report.interesting_facts.is_empty() {
        lines.push(OutputLine::blank());
        lines.push(OutputLine::success("✨ INTERESTING FACTS:"));
        lines.extend(
            report
                .interesting_facts
                .iter()
                .map(|fact| OutputLine::output(format!("  • {fact}"))),
        );
    }

    if !report.modern_code.is_empty() {
        lines.push(OutputLine::blank());
        lines.push(OutputLine::success("🐍 MODERN PYTHON TRANSLATION:"));
        lines.extend(number_lines(&report.modern_code).into_iter().map(OutputLine::code));
        if !report.translation_notes.is_empty() {
            lines.push(OutputLine::system(format!("📝 {}", report.translation_notes)));
        }
    }
    lines.push(OutputLine::blank());
    lines
}
