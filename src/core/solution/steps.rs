//! Step declaration parsing: `1단계:`, `**1단계:**`, `Step 1:`.

use std::sync::LazyLock;

use regex::Regex;

use super::normalize::normalize;
use super::{ParsedSolution, SolutionStep};

/// Title of the single step synthesized when no declaration is found.
pub const FALLBACK_TITLE: &str = "풀이";

/// A step declaration convention.
///
/// `head` matches the declaration itself and captures the step number in group 1.
/// `boundary` marks where the body of a step ends: the next place the same
/// convention starts, with or without its colon.
pub struct StepPattern {
    pub name: &'static str,
    pub head: &'static str,
    pub boundary: &'static str,
}

/// Declaration conventions in priority order. The first one with any match is
/// used for the whole text; conventions are never mixed.
pub const STEP_PATTERNS: [StepPattern; 3] = [
    StepPattern {
        name: "numbered",
        head: r"([0-9]+)\s*단계\s*[:：]",
        boundary: r"[0-9]+\s*단계",
    },
    StepPattern {
        name: "bold-numbered",
        head: r"\*\*([0-9]+)\s*단계\s*[:：]\*\*",
        boundary: r"\*\*[0-9]+\s*단계",
    },
    StepPattern {
        name: "english",
        head: r"(?i)step\s+([0-9]+)\s*[:：]",
        boundary: r"(?i)step\s+[0-9]+",
    },
];

struct CompiledPattern {
    name: &'static str,
    head: Regex,
    boundary: Regex,
}

static COMPILED: LazyLock<Vec<CompiledPattern>> = LazyLock::new(|| {
    STEP_PATTERNS
        .iter()
        .map(|p| CompiledPattern {
            name: p.name,
            head: Regex::new(p.head).expect("valid step head regex"),
            boundary: Regex::new(p.boundary).expect("valid step boundary regex"),
        })
        .collect()
});

/// Split a raw solution into numbered steps.
///
/// Never fails: text without any recognised declaration becomes a single step
/// titled [`FALLBACK_TITLE`] holding the whole normalized input.
pub fn parse_solution(raw: &str) -> ParsedSolution {
    let declared = COMPILED.iter().find_map(|pattern| {
        let found = capture_declarations(pattern, raw);
        if found.is_empty() {
            None
        } else {
            log::debug!(
                "step pattern '{}' matched {} declaration(s)",
                pattern.name,
                found.len()
            );
            Some(found)
        }
    });

    let mut steps: Vec<SolutionStep> = match declared {
        Some(found) => found
            .into_iter()
            .map(|(number, body)| build_step(number, body))
            .collect(),
        None => {
            log::debug!("no step declarations found, using a single fallback step");
            vec![SolutionStep {
                step_number: 1,
                title: FALLBACK_TITLE.to_string(),
                content: normalize(raw),
            }]
        }
    };

    steps.sort_by_key(|s| s.step_number);

    ParsedSolution {
        steps,
        raw_solution: raw.to_string(),
    }
}

/// Every declaration of one convention, as `(number, body)` in source order.
///
/// A body starts after the declaration and any whitespace, holds at least one
/// character, and runs up to the next boundary match or the end of the text.
fn capture_declarations<'a>(pattern: &CompiledPattern, text: &'a str) -> Vec<(u32, &'a str)> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(caps) = pattern.head.captures_at(text, pos) {
        let Some(head) = caps.get(0) else { break };
        let rest = &text[head.end()..];
        if rest.is_empty() {
            break;
        }

        let body_start = head.end() + (rest.len() - rest.trim_start().len());
        let (body, next) = match text[body_start..].chars().next() {
            // Only whitespace follows the declaration.
            None => ("", text.len()),
            Some(first) => {
                let end = pattern
                    .boundary
                    .find_at(text, body_start + first.len_utf8())
                    .map_or(text.len(), |m| m.start());
                (&text[body_start..end], end)
            }
        };

        match caps[1].parse::<u32>() {
            Ok(number) => found.push((number, body)),
            Err(e) => log::debug!("ignoring step number '{}': {}", &caps[1], e),
        }
        pos = next;
    }

    found
}

fn build_step(number: u32, body: &str) -> SolutionStep {
    let body = body.trim();
    let mut lines = body.lines();
    let first_line = lines.next().unwrap_or("");
    let remaining = lines.collect::<Vec<_>>().join("\n");

    let title = normalize(strip_leading_marker(first_line));
    let title = if title.is_empty() {
        format!("단계 {}", number)
    } else {
        title
    };

    let content = normalize(&remaining);
    let content = if content.is_empty() {
        normalize(body)
    } else {
        content
    };

    SolutionStep {
        step_number: number,
        title,
        content,
    }
}

/// Drop one leading `*`, `-` or `•` bullet.
///
/// `-` needs whitespace after it so `-5` keeps its sign. `•` always goes. A `*`
/// goes unless it opens emphasis (`**bold**`, `*italic*`), which normalization
/// handles instead.
fn strip_leading_marker(line: &str) -> &str {
    let line = line.trim_start();
    let stripped = if let Some(rest) = line.strip_prefix('•') {
        Some(rest)
    } else if let Some(rest) = line.strip_prefix('-') {
        (rest.is_empty() || rest.starts_with(char::is_whitespace)).then_some(rest)
    } else if let Some(rest) = line.strip_prefix('*') {
        let spaced = rest.is_empty() || rest.starts_with(char::is_whitespace);
        (spaced || !rest.contains('*')).then_some(rest)
    } else {
        None
    };
    stripped.unwrap_or(line).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_compile_in_priority_order() {
        let names: Vec<&str> = COMPILED.iter().map(|p| p.name).collect();
        assert_eq!(names, ["numbered", "bold-numbered", "english"]);
    }

    #[test]
    fn body_stops_at_next_declaration() {
        let text = "1단계: A\n설명1\n2단계: B\n설명2";
        let found = capture_declarations(&COMPILED[0], text);
        assert_eq!(found, vec![(1, "A\n설명1\n"), (2, "B\n설명2")]);
    }

    #[test]
    fn boundary_does_not_need_a_colon() {
        let text = "1단계: 준비 과정은 3단계 로 나뉜다\n2단계: 끝";
        let found = capture_declarations(&COMPILED[0], text);
        assert_eq!(found, vec![(1, "준비 과정은 "), (2, "끝")]);
    }

    #[test]
    fn declaration_at_end_of_text_has_no_body() {
        let found = capture_declarations(&COMPILED[0], "풀이 1단계:");
        assert!(found.is_empty());
        let found = capture_declarations(&COMPILED[0], "1단계:   ");
        assert_eq!(found, vec![(1, "")]);
    }

    #[test]
    fn oversized_step_number_is_ignored() {
        let found = capture_declarations(&COMPILED[0], "99999999999단계: 너무 큼");
        assert!(found.is_empty());
    }

    #[test]
    fn dash_is_stripped_only_before_whitespace() {
        assert_eq!(strip_leading_marker("- 정리"), "정리");
        assert_eq!(strip_leading_marker("-5 대입"), "-5 대입");
    }

    #[test]
    fn bullet_and_star_need_no_whitespace() {
        assert_eq!(strip_leading_marker("• 정리"), "정리");
        assert_eq!(strip_leading_marker("•정리"), "정리");
        assert_eq!(strip_leading_marker("*핵심 정리"), "핵심 정리");
        assert_eq!(build_step(1, "*핵심 정리\n내용").title, "핵심 정리");
    }

    #[test]
    fn emphasis_opener_is_kept_for_normalization() {
        assert_eq!(strip_leading_marker("** 제목"), "** 제목");
        assert_eq!(strip_leading_marker("*강조* 내용"), "*강조* 내용");
        assert_eq!(build_step(1, "**굵은 제목**\n내용").title, "굵은 제목");
    }

    #[test]
    fn empty_title_gets_numbered_label() {
        let step = build_step(3, "**\n내용");
        assert_eq!(step.title, "단계 3");
        assert_eq!(step.content, "내용");
    }

    #[test]
    fn single_line_step_reuses_body_as_content() {
        let step = build_step(1, "근의 공식 적용");
        assert_eq!(step.title, "근의 공식 적용");
        assert_eq!(step.content, "근의 공식 적용");
    }
}
