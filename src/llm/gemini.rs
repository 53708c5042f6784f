use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::client::get_http_client;
use crate::config::Config;
use crate::constant::GEMINI_API_BASE;
use crate::source::ArticleRef;

use super::GuideGenerator;

pub struct GeminiClient {
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        }
    }
}

#[async_trait]
impl GuideGenerator for GeminiClient {
    async fn generate_guide(&self, article: &ArticleRef, body: &str) -> Result<String> {
        let prompt = build_guide_prompt(article, body);
        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, self.model);
        let request = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });

        let response = get_http_client()
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<GenerateContentResponse>()
            .await?;

        response_text(response)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

fn response_text(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| anyhow!("No response from LLM"))
}

/// Fixed tutor instruction with the article embedded verbatim. The model
/// must answer in plain text; Telegram renders markup characters literally.
pub fn build_guide_prompt(article: &ArticleRef, body: &str) -> String {
    format!(
        r#"당신은 영어 디자인 아티클 심층 독해 튜터입니다.
아래 아티클 본문을 읽고, 다음 형식에 맞춰 한국어로 독해 가이드를 작성하세요.

중요: 절대 마크다운 문법(**, *, #, ``` 등)을 사용하지 마세요. 순수 텍스트로만 작성하세요.

━━━━━━━━━━━━━━━━━━━━━━━━
[핵심 문장 5개 + 한글 해설 보강]

아티클에서 가장 중요한 영어 문장 5개를 골라 각각 아래 형식으로 분석하세요:

n)
(원문 영어 문장 그대로)

• 끊어 읽기:
의미 단위마다 줄바꿈으로 끊어서 표기. 슬래시(/) 사용 금지.
예시:
The central question is no longer
whether a system can perform a task,
but how that performance affects
human agency and cognition.

• 한글 해설(의미):
이 문장이 말하고자 하는 바를 자연스러운 한국어로 풀어서 설명.
핵심 개념에는 영어 원어(한글 뜻) 형태로 병기.

• 구조 해설:
문장에서 배울 만한 문법·구문 패턴을 bullet으로 정리.
예) no longer A, but B = 더 이상 A가 아니라 B다

━━━━━━━━━━━━━━━━━━━━━━━━
[핵심 표현 5선]

원문에서 실전에 쓸 만한 영어 표현 5개를 뽑아 각각:
• 표현 — 뜻 — 예문(영어+한국어 번역)

━━━━━━━━━━━━━━━━━━━━━━━━
[영작 퀴즈]

위 핵심 표현 중 하나를 활용한 한→영 번역 퀴즈 1문제.
• 한국어 문장 제시
• 힌트: 사용할 표현과 문장 구조 팁
• 모범 답안 (숨김 표시: 아래에 작성)

━━━━━━━━━━━━━━━━━━━━━━━━
[추가 질문]

이 글의 내용을 더 깊이 이해하기 위한 생각해볼 질문 2개.

━━━━━━━━━━━━━━━━━━━━━━━━

---
제목: {title}
링크: {link}
저자: {author}

본문:
{body}
---"#,
        title = article.title,
        link = article.link,
        author = article.author,
        body = body,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> ArticleRef {
        ArticleRef {
            title: "Test Title".to_string(),
            link: "https://example.com".to_string(),
            author: "Author".to_string(),
        }
    }

    #[test]
    fn prompt_embeds_all_inputs_verbatim() {
        let body = "This is the actual article body content.";
        let prompt = build_guide_prompt(&article(), body);

        assert!(prompt.contains(body));
        assert!(prompt.contains("제목: Test Title"));
        assert!(prompt.contains("링크: https://example.com"));
        assert!(prompt.contains("저자: Author"));
        assert!(prompt.contains("마크다운 문법"));
    }

    #[test]
    fn response_text_takes_the_first_candidate_part() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [{ "text": "독해 가이드" }],
                    "role": "model"
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "totalTokenCount": 42 }
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();

        assert_eq!(response_text(response).unwrap(), "독해 가이드");
    }

    #[test]
    fn empty_response_is_an_error() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();

        assert!(response_text(response).is_err());
    }
}
