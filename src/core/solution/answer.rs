//! Final answer extraction.

use std::sync::LazyLock;

use regex::Regex;

use super::normalize::strip_star_emphasis;

/// An answer declaration convention. Group 1 captures the rest of the line.
pub struct AnswerPattern {
    pub name: &'static str,
    pub pattern: &'static str,
}

/// Answer conventions in priority order. The first one that matches anywhere wins.
pub const ANSWER_PATTERNS: [AnswerPattern; 4] = [
    AnswerPattern {
        name: "final-or-plain",
        pattern: r"(?:최종\s*)?답[ \t]*[:：][ \t]*([^\n]*)",
    },
    AnswerPattern {
        name: "bold",
        pattern: r"\*\*(?:최종\s*)?답\*\*[ \t]*[:：][ \t]*([^\n]*)",
    },
    AnswerPattern {
        name: "english",
        pattern: r"(?i)answer[ \t]*[:：][ \t]*([^\n]*)",
    },
    AnswerPattern {
        name: "therefore",
        pattern: r"따라서\s*(?:최종\s*)?답은[ \t]*([^\n]*)",
    },
];

static COMPILED: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    ANSWER_PATTERNS
        .iter()
        .map(|p| (p.name, Regex::new(p.pattern).expect("valid answer regex")))
        .collect()
});

/// Find the final answer declared in a raw solution.
///
/// The answer never spans lines. `None` means no declaration was found;
/// `Some("")` is a declaration with nothing after the colon.
pub fn extract_final_answer(raw: &str) -> Option<String> {
    COMPILED.iter().find_map(|(name, re)| {
        let captured = re.captures(raw)?.get(1)?;
        log::debug!("answer pattern '{}' matched", name);
        Some(clean_answer(captured.as_str()))
    })
}

fn clean_answer(captured: &str) -> String {
    strip_star_emphasis(captured.trim()).trim().to_string()
}
