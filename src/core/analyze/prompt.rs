//! Request body for the vision model: tutor prompt, image, and response schema.

use serde_json::{Value, json};

pub(super) const SYSTEM_PROMPT: &str = "\
당신은 학생의 공부를 돕는 AI 튜터입니다. 학생이 촬영한 시험 문제 이미지를 분석하고 다음 내용을 제공하세요:
1. 문제 유형 (예: 수학-기하, 영어-문법, 과학-물리)
2. 과목 (예: 수학, 영어, 과학, 사회)
3. 풀이 과정: 마크다운으로 작성하고, 각 단계를 \"1단계: 제목\" 형식으로 시작한 뒤 다음 줄부터 설명하세요.
4. 마지막 줄에 \"답: ...\" 형식으로 최종 답을 명시하세요.

학생이 이해할 수 있도록 친절하고 자세하게 설명하세요.";

pub(super) const USER_PROMPT: &str = "이 문제를 분석하고 풀이 과정을 보여주세요.";

fn response_format() -> Value {
    json!({
        "type": "json_schema",
        "json_schema": {
            "name": "problem_analysis",
            "strict": true,
            "schema": {
                "type": "object",
                "properties": {
                    "problemType": {
                        "type": "string",
                        "description": "문제 유형 (예: 수학-기하, 영어-문법)"
                    },
                    "subject": {
                        "type": "string",
                        "description": "과목 (예: 수학, 영어, 과학)"
                    },
                    "solution": {
                        "type": "string",
                        "description": "단계별 풀이 과정 (마크다운)"
                    }
                },
                "required": ["problemType", "subject", "solution"],
                "additionalProperties": false
            }
        }
    })
}

/// Chat completion request carrying the image as a data URL.
pub(super) fn request_body(model: &str, image_data_url: &str) -> Value {
    json!({
        "model": model,
        "messages": [
            {"role": "system", "content": SYSTEM_PROMPT},
            {
                "role": "user",
                "content": [
                    {"type": "text", "text": USER_PROMPT},
                    {
                        "type": "image_url",
                        "image_url": {"url": image_data_url, "detail": "high"}
                    }
                ]
            }
        ],
        "response_format": response_format(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_model_image_and_schema() {
        let body = request_body("gpt-4o", "data:image/png;base64,AAAA");
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(
            body["messages"][1]["content"][1]["image_url"]["url"],
            "data:image/png;base64,AAAA"
        );
        assert_eq!(
            body["response_format"]["json_schema"]["schema"]["required"],
            json!(["problemType", "subject", "solution"])
        );
    }

    #[test]
    fn prompt_asks_for_parseable_markers() {
        assert!(SYSTEM_PROMPT.contains("1단계:"));
        assert!(SYSTEM_PROMPT.contains("답:"));
    }
}
