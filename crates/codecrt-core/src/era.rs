//! Era registry.
//!
//! Each terminal mode is an era with a fixed language, execution-engine id and
//! AI persona. The rows are plain data; prompt builders are parameterized by
//! an [`EraProfile`] instead of dispatching on the mode.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// The three terminal modes, in `toggle` cycle order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum Era {
    #[strum(serialize = "1972")]
    #[serde(rename = "1972")]
    Era1972,
    #[strum(serialize = "1985")]
    #[serde(rename = "1985")]
    Era1985,
    #[strum(serialize = "2025")]
    #[serde(rename = "2025")]
    Era2025,
}

impl Default for Era {
    fn default() -> Self {
        Era::Era1972
    }
}

impl Era {
    /// Next era in the fixed cycle 1972 → 1985 → 2025 → 1972.
    pub fn next(self) -> Self {
        match self {
            Era::Era1972 => Era::Era1985,
            Era::Era1985 => Era::Era2025,
            Era::Era2025 => Era::Era1972,
        }
    }

    /// Registry row for this era.
    pub fn profile(self) -> &'static EraProfile {
        match self {
            Era::Era1972 => &ERA_1972,
            Era::Era1985 => &ERA_1985,
            Era::Era2025 => &ERA_2025,
        }
    }

    pub fn language(self) -> &'static str {
        self.profile().language
    }

    pub fn execution_id(self) -> u32 {
        self.profile().execution_id
    }

    /// All eras in chronological order.
    pub fn timeline() -> impl Iterator<Item = Era> {
        Era::iter()
    }
}

/// One row of the era registry.
#[derive(Debug, PartialEq, Eq)]
pub struct EraProfile {
    pub year: u16,
    /// Display name used by the evolution timeline ("Procedural Era", ...)
    pub name: &'static str,
    pub language: &'static str,
    /// Language id understood by the execution gateway
    pub execution_id: u32,
    pub persona_name: &'static str,
    /// Persona prefix for code generation and debugging
    pub code_persona: &'static str,
    /// Persona prefix for conversational explanations
    pub explain_persona: &'static str,
    /// Rewrite instruction used by `evolve`
    pub evolution_prompt: &'static str,
    pub icon: &'static str,
    pub file_extension: &'static str,
}

static ERA_1972: EraProfile = EraProfile {
    year: 1972,
    name: "Procedural Era",
    language: "C",
    execution_id: 50,
    persona_name: "C-MASTER",
    code_persona: r#"You are C-MASTER, programming in 1972. Your responses MUST reflect this era:
- Write minimalist C code (ANSI C style)
- Use basic functions only - no complex features
- Reference: "64KB RAM limit", "saving clock cycles", "magnetic tape storage"
- Variables: Use short names (i, j, n, x, y)
- Comments: Brief, mention hardware constraints
- Output: Use printf only, no user input
- Code style: Procedural, efficient, under 25 lines

CRITICAL RULES:
- NEVER use scanf() or any user input functions
- Use hardcoded test values instead (e.g., int n = 10;)
- Keep code SIMPLE - avoid complex logic
- The code must run without any user interaction
- Write SHORT, easy-to-understand code"#,
    explain_persona: r#"You're C-MASTER from 1972. Explain this code like we're chatting in the computer lab:
- "Back in '72, we'd write this to..."
- "See how this saves precious memory?"
- Sound like a seasoned engineer sharing wisdom
- Keep it conversational, 3-4 sentences max
- No technical jargon without explanation"#,
    evolution_prompt: "Rewrite this code in MINIMAL C (1972 style). CRITICAL REQUIREMENTS: Keep it under 25 lines total. Use ONLY basic procedural programming - simple functions, no complex logic. Add ONE brief comment about '64KB RAM' OR 'clock cycles'. Use printf for output (NO scanf). Use ONE hardcoded test value. KEEP IT EXTREMELY SHORT AND SIMPLE.",
    icon: "💾",
    file_extension: ".c",
};

static ERA_1985: EraProfile = EraProfile {
    year: 1985,
    name: "Object-Oriented Era",
    language: "C++",
    execution_id: 54,
    persona_name: "CPP-WIZARD",
    code_persona: r#"You are CPP-WIZARD, programming in 1985 during the OOP revolution:
- Write simple C++ with basic classes
- Use cout not printf
- Reference: "object-oriented paradigm", "encapsulation", "the new C++ standard"
- One simple class max, 2-3 methods
- ALWAYS use #include <iostream> NOT <iostream.h>
- ALWAYS use std::cout and std::endl (or using namespace std;)

CRITICAL RULES:
- NEVER use cin or any user input functions
- Use hardcoded test values in main() (e.g., int n = 10;)
- Keep code SIMPLE - one class, basic methods only
- The code must run without any user interaction
- Write SHORT, easy-to-understand code"#,
    explain_persona: r#"You're CPP-WIZARD from 1985. Explain this like we're at a tech conference:
- "What's cool about this OOP approach..."
- "Back in '85, this was revolutionary because..."
- Sound enthusiastic about new programming paradigms
- Keep it conversational, 3-4 sentences max
- Like explaining to a fellow developer over coffee"#,
    evolution_prompt: "Rewrite this code in MINIMAL C++ (1985 style). CRITICAL REQUIREMENTS: Keep it under 30 lines total. Use ONE simple class with 2-3 basic methods maximum. Add ONE brief comment about 'encapsulation' OR 'OOP'. Use cout for output (NO cin). Use #include <iostream> and std::cout. Use ONE hardcoded test value in main(). KEEP IT EXTREMELY SHORT AND SIMPLE.",
    icon: "🔧",
    file_extension: ".cpp",
};

static ERA_2025: EraProfile = EraProfile {
    year: 2025,
    name: "Modern Era",
    language: "Python",
    execution_id: 71,
    persona_name: "QUANTUM-Q",
    code_persona: r#"You are QUANTUM-Q, a modern AI assistant:
- Write clean, readable Python 3.x
- Follow PEP 8 style guidelines
- Use descriptive variable names
- Use f-strings and modern Python features
- Code style: Pythonic, maintainable, under 20 lines

CRITICAL RULES:
- NEVER use input() or any user input functions
- Use hardcoded test values instead (e.g., test_value = 10)
- Keep code VERY SIMPLE - straightforward logic only
- The code must run without any user interaction
- Write SHORT, easy-to-understand code"#,
    explain_persona: r#"You're QUANTUM-Q from 2025. Explain this like we're pair programming:
- "So here's what this code does..."
- "This is clean because..."
- Sound like a helpful teammate
- Keep it conversational, 3-4 sentences max
- Focus on readability and modern practices"#,
    evolution_prompt: "Rewrite this code in MINIMAL Python (modern style). CRITICAL REQUIREMENTS: Keep it under 20 lines total. Use the SIMPLEST, cleanest approach possible. Add ONE brief comment about 'pythonic' OR 'clean code'. NO input() - use ONE hardcoded test value. KEEP IT EXTREMELY SHORT AND SIMPLE.",
    icon: "🚀",
    file_extension: ".py",
};

/// Default editor contents shipped with the terminal. Commands that need
/// "real" code treat these the same as an empty editor.
pub const PLACEHOLDER_SNIPPETS: [&str; 2] = [
    "# Write your code here\nprint(\"Hello from the future!\")",
    "/* Write your C code here */\n#include <stdio.h>\n\nint main() {\n    printf(\"Hello from 1972!\\n\");\n    return 0;\n}",
];

/// Starting editor contents for an era.
pub fn placeholder_for(era: Era) -> &'static str {
    match era {
        Era::Era2025 => PLACEHOLDER_SNIPPETS[0],
        _ => PLACEHOLDER_SNIPPETS[1],
    }
}

/// True when the code is empty, whitespace, or one of the shipped placeholders.
pub fn is_blank_or_placeholder(code: &str) -> bool {
    code.trim().is_empty() || PLACEHOLDER_SNIPPETS.contains(&code)
}

/// File extension for an arbitrary language name, `.txt` when unknown.
pub fn extension_for_language(language: &str) -> &'static str {
    match language {
        "C" => ".c",
        "C++" => ".cpp",
        "Python" => ".py",
        "JavaScript" => ".js",
        "Java" => ".java",
        _ => ".txt",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_cycle_has_period_three() {
        for start in Era::iter() {
            assert_eq!(start.next().next().next(), start);
            assert_ne!(start.next(), start);
        }
    }

    #[test]
    fn test_registry_rows() {
        let rows: Vec<(String, &str, u32)> = Era::timeline()
            .map(|era| (era.to_string(), era.language(), era.execution_id()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("1972".to_string(), "C", 50),
                ("1985".to_string(), "C++", 54),
                ("2025".to_string(), "Python", 71),
            ]
        );
    }

    #[test]
    fn test_parse_from_year() {
        assert_eq!(Era::from_str("1985").ok(), Some(Era::Era1985));
        assert!(Era::from_str("1999").is_err());
    }

    #[test]
    fn test_placeholders_count_as_blank() {
        assert!(is_blank_or_placeholder("   \n"));
        assert!(is_blank_or_placeholder(placeholder_for(Era::Era2025)));
        assert!(is_blank_or_placeholder(placeholder_for(Era::Era1972)));
        assert!(!is_blank_or_placeholder("print(1)"));
    }

    #[test]
    fn test_extension_lookup() {
        assert_eq!(extension_for_language("C++"), ".cpp");
        assert_eq!(extension_for_language("COBOL"), ".txt");
        for era in Era::iter() {
            assert_eq!(extension_for_language(era.language()), era.profile().file_extension);
        }
    }
}
