//! Plain-text and JSON views of a parsed solution.

use serde::Serialize;

use crate::core::solution::{ParsedSolution, SolutionStep};

pub const ANSWER_NOT_FOUND: &str = "답을 찾을 수 없습니다";

const INDENT: &str = "    ";

/// Steps with wrapped, indented content, followed by the final answer line.
pub fn render_solution(parsed: &ParsedSolution, width: usize) -> String {
    let options = textwrap::Options::new(width.max(INDENT.len() + 8))
        .initial_indent(INDENT)
        .subsequent_indent(INDENT);

    let mut out = String::new();
    for step in &parsed.steps {
        out.push_str(&format!("{}단계: {}\n", step.step_number, step.title));
        for line in step.content.lines() {
            if line.trim().is_empty() {
                out.push('\n');
            } else {
                out.push_str(&textwrap::fill(line, &options));
                out.push('\n');
            }
        }
        out.push('\n');
    }

    match parsed.final_answer() {
        Some(answer) => out.push_str(&format!("답: {}\n", answer)),
        None => out.push_str(&format!("{}\n", ANSWER_NOT_FOUND)),
    }
    out
}

/// Machine-readable view used by `--json`.
#[derive(Debug, Serialize)]
pub struct SolutionReport<'a> {
    pub steps: &'a [SolutionStep],
    pub final_answer: Option<String>,
}

impl<'a> SolutionReport<'a> {
    pub fn new(parsed: &'a ParsedSolution) -> Self {
        Self {
            steps: &parsed.steps,
            final_answer: parsed.final_answer(),
        }
    }
}
