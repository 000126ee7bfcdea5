//! Challenge rolling, reply parsing and verdict classification.

use codecrt_core::session::{Challenge, Difficulty};
use codecrt_core::text::strip_code_fences;
use rand::Rng;
use regex::Regex;
use std::sync::OnceLock;

pub const CATEGORIES: [&str; 8] = [
    "string manipulation (reverse, palindrome, count vowels)",
    "array operations (find max/min, sum, average, filter)",
    "mathematical operations (factorial, fibonacci, prime check)",
    "pattern printing (triangles, diamonds, number patterns)",
    "simple algorithms (bubble sort snippet, linear search, swap)",
    "conditional logic (FizzBuzz variant, grade calculator, leap year)",
    "loop challenges (count down, multiplication table, sum of digits)",
    "basic data structures (list operations, simple stack/queue)",
];

/// Weighted toward Easy: three Easy slots to one Medium.
const DIFFICULTY_SLOTS: [Difficulty; 4] = [
    Difficulty::Easy,
    Difficulty::Easy,
    Difficulty::Easy,
    Difficulty::Medium,
];

const FALLBACK_TASK: &str = "Complete the coding challenge";

/// The random parameters a challenge request is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeRoll {
    pub category: &'static str,
    pub difficulty: Difficulty,
    pub time_limit: u32,
}

impl ChallengeRoll {
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        let category = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
        let difficulty = DIFFICULTY_SLOTS[rng.gen_range(0..DIFFICULTY_SLOTS.len())];
        let time_limit = rng.gen_range(difficulty.time_window());
        Self {
            category,
            difficulty,
            time_limit,
        }
    }

    /// Category without the parenthesised examples.
    pub fn category_label(&self) -> &'static str {
        self.category
            .split('(')
            .next()
            .map(str::trim)
            .unwrap_or(self.category)
    }
}

struct ChallengePatterns {
    task: Regex,
    example: Regex,
    difficulty: Regex,
    time: Regex,
    solution: Regex,
}

fn patterns() -> &'static ChallengePatterns {
    static CACHED: OnceLock<ChallengePatterns> = OnceLock::new();
    CACHED.get_or_init(|| ChallengePatterns {
        task: Regex::new(r"TASK: (.+)").expect("task regex must compile"),
        example: Regex::new(r"EXAMPLE: (.+)").expect("example regex must compile"),
        difficulty: Regex::new(r"DIFFICULTY: (.+)").expect("difficulty regex must compile"),
        time: Regex::new(r"TIME: (\d+)").expect("time regex must compile"),
        solution: Regex::new(r"SOLUTION:([\s\S]*)").expect("solution regex must compile"),
    })
}

fn capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text).and_then(|c| c.get(1)).map(|m| m.as_str())
}

/// Builds a challenge from the model's tagged reply.
///
/// Missing or unusable fields fall back to the rolled values; the solution
/// has its code fences removed.
pub fn parse_challenge(reply: &str, roll: &ChallengeRoll, language: &str) -> Challenge {
    let p = patterns();
    let reply = reply.trim();

    let task = capture(&p.task, reply)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(FALLBACK_TASK);
    let example = capture(&p.example, reply).map(|e| e.trim().to_string());
    let difficulty = capture(&p.difficulty, reply)
        .and_then(|d| d.parse::<Difficulty>().ok())
        .unwrap_or(roll.difficulty);
    let time_limit = capture(&p.time, reply)
        .and_then(|t| t.parse::<u32>().ok())
        .filter(|&t| t > 0)
        .unwrap_or(roll.time_limit);
    let solution = capture(&p.solution, reply)
        .map(strip_code_fences)
        .unwrap_or_default();

    Challenge::new(task, example, difficulty, time_limit, solution, language)
}

/// The verifier's answer to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct(String),
    Incorrect(String),
    /// Handled exactly like `Incorrect`, with a friendlier message
    Partial(String),
    Unrecognized(String),
}

impl Verdict {
    /// Classifies by leading keyword. Matching is case-sensitive.
    pub fn parse(reply: &str) -> Self {
        let reply = reply.trim();
        if let Some(rest) = reply.strip_prefix("CORRECT") {
            Verdict::Correct(explanation_after_keyword(rest))
        } else if let Some(rest) = reply.strip_prefix("INCORRECT") {
            Verdict::Incorrect(explanation_after_keyword(rest))
        } else if let Some(rest) = reply.strip_prefix("PARTIAL") {
            Verdict::Partial(explanation_after_keyword(rest))
        } else {
            Verdict::Unrecognized(reply.to_string())
        }
    }
}

fn explanation_after_keyword(rest: &str) -> String {
    let rest = rest.trim_start();
    rest.strip_prefix('-').unwrap_or(rest).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn roll() -> ChallengeRoll {
        ChallengeRoll {
            category: CATEGORIES[0],
            difficulty: Difficulty::Easy,
            time_limit: 133,
        }
    }

    #[test]
    fn test_roll_stays_inside_windows() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut saw_medium = false;
        for _ in 0..200 {
            let r = ChallengeRoll::roll(&mut rng);
            assert!(r.difficulty.time_window().contains(&r.time_limit));
            assert!(CATEGORIES.contains(&r.category));
            saw_medium |= r.difficulty == Difficulty::Medium;
        }
        assert!(saw_medium);
    }

    #[test]
    fn test_category_label() {
        assert_eq!(roll().category_label(), "string manipulation");
    }

    #[test]
    fn test_parse_full_reply() {
        let reply = "TASK: Reverse the word 'retro'\nEXAMPLE: retro -> orter\nDIFFICULTY: Medium\nTIME: 170\nSOLUTION:\n```python\nprint('retro'[::-1])\n```";
        let c = parse_challenge(reply, &roll(), "Python");
        assert_eq!(c.task, "Reverse the word 'retro'");
        assert_eq!(c.example.as_deref(), Some("retro -> orter"));
        assert_eq!(c.difficulty, Difficulty::Medium);
        assert_eq!(c.time_limit_seconds, 170);
        assert_eq!(c.remaining_seconds, 170);
        assert_eq!(c.reference_solution, "print('retro'[::-1])");
        assert_eq!(c.attempts, 0);
    }

    #[test]
    fn test_parse_falls_back_to_roll() {
        let c = parse_challenge("I can't do that", &roll(), "C");
        assert_eq!(c.task, "Complete the coding challenge");
        assert!(c.example.is_none());
        assert_eq!(c.difficulty, Difficulty::Easy);
        assert_eq!(c.time_limit_seconds, 133);
        assert!(c.reference_solution.is_empty());
        assert_eq!(c.language, "C");
    }

    #[test]
    fn test_unknown_difficulty_uses_roll() {
        let c = parse_challenge("TASK: x\nDIFFICULTY: Hard", &roll(), "C");
        assert_eq!(c.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_verdicts() {
        assert_eq!(
            Verdict::parse("CORRECT - prints the right sum"),
            Verdict::Correct("prints the right sum".to_string())
        );
        assert_eq!(
            Verdict::parse("INCORRECT -off by one"),
            Verdict::Incorrect("off by one".to_string())
        );
        assert_eq!(Verdict::parse("PARTIAL"), Verdict::Partial(String::new()));
        assert!(matches!(Verdict::parse("Looks good!"), Verdict::Unrecognized(_)));
        assert!(matches!(
            Verdict::parse("incorrect - lowercase"),
            Verdict::Unrecognized(_)
        ));
    }
}
