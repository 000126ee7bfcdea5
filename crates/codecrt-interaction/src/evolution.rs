//! Code time machine: rewrites one snippet for every era in order.

use crate::prompts;
use codecrt_core::era::Era;
use codecrt_core::gateway::CompletionGateway;
use codecrt_core::session::OutputLine;
use codecrt_core::text::{number_lines, strip_code_fences};
use codecrt_core::Result;
use std::sync::Arc;

/// One entry of the evolution timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionStep {
    pub era: Era,
    pub code: String,
}

impl EvolutionStep {
    pub fn lines(&self) -> Vec<OutputLine> {
        let profile = self.era.profile();
        let mut lines = vec![
            OutputLine::blank(),
            OutputLine::success(format!(
                "{} {} · {} ({})",
                profile.icon, profile.year, profile.name, profile.language
            )),
        ];
        lines.extend(number_lines(&self.code).into_iter().map(OutputLine::code));
        lines
    }
}

pub struct EvolutionRunner {
    completion: Arc<dyn CompletionGateway>,
}

impl EvolutionRunner {
    pub fn new(completion: Arc<dyn CompletionGateway>) -> Self {
        Self { completion }
    }

    /// Requests 1972, 1985 and 2025 versions of `source`, strictly in order.
    ///
    /// `on_step` sees each version as soon as it arrives. The first failure
    /// ends the run; steps delivered before it stay delivered.
    pub async fn run<F>(&self, source: &str, mut on_step: F) -> Result<Vec<EvolutionStep>>
    where
        F: FnMut(&EvolutionStep),
    {
        let mut steps = Vec::with_capacity(3);
        for era in Era::timeline() {
            tracing::info!("[Evolution] Rewriting for {}", era);
            let reply = self
                .completion
                .complete(prompts::evolution(era.profile(), source))
                .await
                .inspect_err(|e| tracing::warn!("[Evolution] {} failed: {}", era, e))?;

            let step = EvolutionStep {
                era,
                code: strip_code_fences(&reply),
            };
            on_step(&step);
            steps.push(step);
        }
        Ok(steps)
    }
}
