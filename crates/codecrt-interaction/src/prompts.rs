//! Era-aware prompt builder.
//!
//! Every request sent to the completion gateway is assembled here from an
//! [`EraProfile`]; nothing else in the crate formats prompt text.

use codecrt_core::era::{EraProfile, is_blank_or_placeholder};
use codecrt_core::gateway::{ChatMessage, CompletionRequest};
use codecrt_core::session::{Challenge, Difficulty};

pub const CHALLENGE_MAX_TOKENS: u32 = 1000;
pub const VERIFY_MAX_TOKENS: u32 = 500;
pub const EXPLAIN_MAX_TOKENS: u32 = 300;

fn raw_code_only(language: &str) -> String {
    format!(
        "CRITICAL: Return ONLY code ({language}), no explanations, no markdown backticks, no preamble. Just raw executable code."
    )
}

/// `ai <text>`: persona + request, with the editor as context when it holds real code.
pub fn code_generation(era: &EraProfile, request: &str, editor_text: &str) -> CompletionRequest {
    let body = if is_blank_or_placeholder(editor_text) {
        request.to_string()
    } else {
        format!(
            "Current code in editor:\n```\n{editor_text}\n```\n\nUser request: {request}\n\nPlease provide updated or new {} code based on the current code and the user's request.",
            era.language
        )
    };

    CompletionRequest::prompt(format!(
        "{}\n\n{body}\n\n{}",
        era.code_persona,
        raw_code_only(era.language)
    ))
}

/// `debug`: persona in debug mode as system message, failing code + diagnostic as user message.
pub fn debug_fix(era: &EraProfile, code: &str, diagnostic: &str) -> CompletionRequest {
    let language = era.language;
    CompletionRequest::with_messages(vec![
        ChatMessage::system(format!(
            "{}\n\nYou are in DEBUG MODE. Your task is to fix errors in code.",
            era.code_persona
        )),
        ChatMessage::user(format!(
            "This {language} code has an error. Please fix it and return the corrected code.\n\nCODE WITH ERROR:\n```\n{code}\n```\n\nERROR MESSAGE:\n{diagnostic}\n\nCRITICAL: Return ONLY the fixed {language} code, no explanations, no markdown backticks, no preamble. Just raw executable code that fixes the error."
        )),
    ])
}

/// `explain`: short conversational explanation in the era's voice.
pub fn explanation(era: &EraProfile, code: &str) -> CompletionRequest {
    CompletionRequest::prompt(format!(
        "{}\n\nHere's the {} code I'm looking at:\n\n```\n{code}\n```\n\nGive me your thoughts:",
        era.explain_persona, era.language
    ))
    .with_max_tokens(EXPLAIN_MAX_TOKENS)
}

/// `challenge`: asks for the tagged TASK/EXAMPLE/DIFFICULTY/TIME/SOLUTION format.
pub fn challenge(
    era: &EraProfile,
    category: &str,
    difficulty: Difficulty,
    time_limit: u32,
) -> CompletionRequest {
    let language = era.language;
    let level = difficulty.to_string();
    let level_lower = level.to_lowercase();
    CompletionRequest::prompt(format!(
        "Generate a UNIQUE, RANDOM {level} coding challenge for {language} in the category: {category}.

IMPORTANT: Make it DIFFERENT from common examples. Be creative and unique!

Requirements:
- Task should be {level_lower} difficulty
- Should have clear input/output requirements
- Suitable for speed coding
- Can be completed in under 20 lines of code
- Must be solvable WITHOUT user input (use hardcoded test values)

Format your response EXACTLY like this (no other text):
TASK: [one sentence description of a unique challenge]
EXAMPLE: [show one simple example with expected output]
DIFFICULTY: {level}
TIME: {time_limit}
SOLUTION: [provide a working solution in {language}]"
    ))
    .with_max_tokens(CHALLENGE_MAX_TOKENS)
}

/// `submit`: compares the student's code and output against the reference.
pub fn verification(challenge: &Challenge, language: &str, code: &str, output: &str) -> CompletionRequest {
    let expected = challenge
        .example
        .as_deref()
        .map(|example| format!("EXPECTED BEHAVIOR: {example}"))
        .unwrap_or_default();
    let output = if output.is_empty() { "(no output)" } else { output };

    CompletionRequest::prompt(format!(
        "You are verifying a coding challenge solution.

CHALLENGE TASK: {task}
{expected}

STUDENT'S CODE:
```{language}
{code}
```

CODE OUTPUT:
{output}

REFERENCE SOLUTION:
```{language}
{solution}
```

Does this code correctly solve the challenge? Compare the student's output and logic to the reference solution.

Respond with EXACTLY one of these formats:
CORRECT - [brief explanation why it's correct]
INCORRECT - [brief explanation what's wrong and a hint]
PARTIAL - [brief explanation what's working and what's missing]",
        task = challenge.task,
        solution = challenge.reference_solution,
    ))
    .with_max_tokens(VERIFY_MAX_TOKENS)
}

/// `evolve`: rewrite `code` for one era of the timeline.
pub fn evolution(era: &EraProfile, code: &str) -> CompletionRequest {
    let language = era.language;
    CompletionRequest::prompt(format!(
        "{}\n\nOriginal code (may be in a different language - translate it):\n```\n{code}\n```\n\nCRITICAL: Return ONLY {language} code, no explanations, no markdown backticks, no preamble. Just raw executable {language} code.",
        era.evolution_prompt
    ))
}

/// Fossil mode: archaeology report as bare JSON.
pub fn fossil_analysis(code: &str, filename: &str) -> CompletionRequest {
    CompletionRequest::prompt(format!(
        r#"You are an AI code archaeologist. Analyze this legacy code from the file "{filename}":

```
{code}
```

Return ONLY valid JSON (no markdown):
{{
  "language": "string",
  "era": "string (e.g., '1970s', '1980s')",
  "linesOfCode": number,
  "complexity": "Low/Medium/High",
  "summary": "string (2-3 sentences)",
  "purpose": "string",
  "modernCode": "string (Python translation)",
  "translationNotes": "string",
  "vulnerabilities": [{{"type":"","description":"","severity":"High/Medium/Low","fix":""}}],
  "historicalContext": "string (3-4 sentences about the era)",
  "migrationStrategy": "string",
  "interestingFacts": ["string", "string", "string"]
}}"#
    ))
}
