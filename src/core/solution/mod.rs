//! Solution text pipeline: turns a model-written Markdown solution into numbered steps,
//! a final answer, and plain display text.
//!
//! Everything here is pure. Patterns are compiled once into process-wide statics;
//! a compiled `Regex` keeps no match cursor, so concurrent callers never interfere.

use serde::Serialize;

mod answer;
mod normalize;
mod steps;

pub use answer::{ANSWER_PATTERNS, AnswerPattern, extract_final_answer};
pub use normalize::{STAGES, SYMBOLS, Stage, normalize};
pub use steps::{FALLBACK_TITLE, STEP_PATTERNS, StepPattern, parse_solution};

/// One numbered unit of a worked solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionStep {
    /// Ordinal as written in the source text (not necessarily contiguous).
    pub step_number: u32,
    pub title: String,
    pub content: String,
}

/// Steps recovered from one raw solution, plus the untouched input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedSolution {
    /// Sorted ascending by `step_number`; never empty.
    pub steps: Vec<SolutionStep>,
    pub raw_solution: String,
}

impl ParsedSolution {
    /// Final answer declared anywhere in the raw text.
    pub fn final_answer(&self) -> Option<String> {
        extract_final_answer(&self.raw_solution)
    }
}

#[cfg(test)]
mod tests;
