//! End-to-end behaviour of the solution pipeline.

use super::*;

#[test]
fn two_numbered_steps() {
    let parsed = parse_solution("1단계: A\n설명1\n2단계: B\n설명2\n답: 7");
    let numbers: Vec<u32> = parsed.steps.iter().map(|s| s.step_number).collect();
    assert_eq!(numbers, [1, 2]);
    assert_eq!(parsed.steps[0].title, "A");
    assert_eq!(parsed.steps[1].title, "B");
    assert!(parsed.steps[0].content.contains("설명1"));
    assert!(parsed.steps[1].content.contains("설명2"));
}

#[test]
fn trailing_answer_line_stays_in_last_step() {
    let parsed = parse_solution("1단계: A\n설명1\n2단계: B\n설명2\n답: 7");
    assert_eq!(parsed.steps[1].content, "설명2\n답: 7");
}

#[test]
fn no_declarations_falls_back_to_one_step() {
    let raw = "## 풀이\n직접 계산하면 **10** 입니다.";
    let parsed = parse_solution(raw);
    assert_eq!(parsed.steps.len(), 1);
    assert_eq!(parsed.steps[0].step_number, 1);
    assert_eq!(parsed.steps[0].title, FALLBACK_TITLE);
    assert_eq!(parsed.steps[0].content, normalize(raw));
}

#[test]
fn empty_input_still_has_one_step() {
    let parsed = parse_solution("");
    assert_eq!(parsed.steps.len(), 1);
    assert_eq!(parsed.steps[0].content, "");
}

#[test]
fn out_of_order_declarations_are_sorted() {
    let parsed = parse_solution("2단계: 둘째\n나중\n1단계: 첫째\n먼저");
    let numbers: Vec<u32> = parsed.steps.iter().map(|s| s.step_number).collect();
    assert_eq!(numbers, [1, 2]);
    assert_eq!(parsed.steps[0].title, "첫째");
    assert_eq!(parsed.steps[1].title, "둘째");
}

#[test]
fn bold_declarations_round_trip() {
    let raw = "**1단계:** x절편 구하기\ny=0 대입\n\n**2단계:** y절편 구하기\nx=0 대입\n\n답: (2,3)";
    let parsed = parse_solution(raw);
    let titles: Vec<&str> = parsed.steps.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["x절편 구하기", "y절편 구하기"]);
    assert_eq!(parsed.steps[0].content, "y=0 대입");
    assert_eq!(parsed.final_answer().as_deref(), Some("(2,3)"));
    assert_eq!(parsed.raw_solution, raw);
}

#[test]
fn bold_wrapped_whole_declaration_line() {
    let raw = "**1단계: x절편 구하기**\ny = 0을 대입합니다.\n\n**2단계: y절편 구하기**\nx = 0을 대입합니다.";
    let parsed = parse_solution(raw);
    assert_eq!(parsed.steps.len(), 2);
    assert_eq!(parsed.steps[0].title, "x절편 구하기");
    assert_eq!(parsed.steps[1].title, "y절편 구하기");
}

#[test]
fn english_steps() {
    let raw = "Step 1: Isolate x\n2x = 10\nstep 2: Divide\nx = 5\nAnswer: x = 5";
    let parsed = parse_solution(raw);
    let titles: Vec<&str> = parsed.steps.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["Isolate x", "Divide"]);
    assert_eq!(parsed.final_answer().as_deref(), Some("x = 5"));
}

#[test]
fn first_matching_convention_is_used_exclusively() {
    let parsed = parse_solution("1단계: 한국어\n내용\nStep 2: English\nmore");
    assert_eq!(parsed.steps.len(), 1);
    assert_eq!(parsed.steps[0].step_number, 1);
    assert!(parsed.steps[0].content.contains("Step 2: English"));
}

#[test]
fn step_content_is_normalized() {
    let parsed = parse_solution("1단계: 분수 정리\n$\\frac{20}{100} \\times 5$\n2단계: 끝\n완료");
    assert_eq!(parsed.steps[0].content, "1/5 × 5");
}

#[test]
fn parsing_is_deterministic() {
    let raw = "1단계: A\n- 설명\n2단계: B\n$x^{2}$";
    assert_eq!(parse_solution(raw), parse_solution(raw));
}

#[test]
fn concurrent_callers_agree() {
    let raw = "Step 1: a\nb\nStep 2: c\nd\nAnswer: e";
    let expected = parse_solution(raw);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || (parse_solution(raw), extract_final_answer(raw))))
        .collect();
    for handle in handles {
        let (parsed, answer) = handle.join().unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(answer.as_deref(), Some("e"));
    }
}

#[test]
fn answer_is_independent_of_steps() {
    let raw = "1단계: 계산 과정\n2단계: 정리\n답: x = 5";
    let answer = extract_final_answer(raw).unwrap();
    assert_eq!(answer, "x = 5");
    assert!(!answer.contains("단계"));
}

#[test]
fn pattern_tables_keep_their_priority() {
    let steps: Vec<&str> = STEP_PATTERNS.iter().map(|p| p.name).collect();
    assert_eq!(steps, ["numbered", "bold-numbered", "english"]);
    let answers: Vec<&str> = ANSWER_PATTERNS.iter().map(|p| p.name).collect();
    assert_eq!(answers, ["final-or-plain", "bold", "english", "therefore"]);
}
