//! OpenAI Chat Completions APIのワイヤ型
//!
//! CLI（reqwest）とWeb(WASM, fetch)で共有されるリクエスト/レスポンス型。
//! 抽出リクエストは固定形: 画像パート（high detail）+ 指示文の
//! 1ユーザーターンのみ。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::prompts::{build_retry_prompt, EXTRACTION_PROMPT};
use crate::schema::response_format;

pub const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// 使用モデル（固定）
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// 出力トークン上限（固定）
pub const MAX_TOKENS: u32 = 4000;

/// 検証失敗時の再依頼回数上限
pub const VALIDATION_RETRIES: usize = 1;

/// Chat Completionsリクエスト
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub max_tokens: u32,
    pub response_format: Value,
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub role: String,
    pub content: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Part {
    ImageUrl { image_url: ImageUrl },
    Text { text: String },
}

#[derive(Debug, Serialize)]
pub struct ImageUrl {
    pub url: String,
    pub detail: String,
}

impl ChatRequest {
    /// レシート抽出リクエストを構築する
    ///
    /// 画像参照（high detail指定）と固定指示文を1ユーザーターンに載せる。
    /// 呼び出し時に可変なのは画像URLのみ。
    pub fn extraction(model: &str, max_tokens: u32, image_url: &str) -> Self {
        Self::build(model, max_tokens, image_url, EXTRACTION_PROMPT.to_string())
    }

    /// 検証エラー後の再抽出リクエストを構築する
    pub fn extraction_retry(
        model: &str,
        max_tokens: u32,
        image_url: &str,
        validation_error: &str,
    ) -> Self {
        Self::build(
            model,
            max_tokens,
            image_url,
            build_retry_prompt(validation_error),
        )
    }

    fn build(model: &str, max_tokens: u32, image_url: &str, text: String) -> Self {
        ChatRequest {
            model: model.to_string(),
            max_tokens,
            response_format: response_format(),
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![
                    Part::ImageUrl {
                        image_url: ImageUrl {
                            url: image_url.to_string(),
                            detail: "high".to_string(),
                        },
                    },
                    Part::Text { text },
                ],
            }],
        }
    }
}

/// Chat Completionsレスポンス
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// 最初の候補の本文
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
    }

    /// 出力上限で途切れたか（finish_reason == "length"）
    pub fn truncated(&self) -> bool {
        self.choices
            .first()
            .and_then(|choice| choice.finish_reason.as_deref())
            .map(|reason| reason == "length")
            .unwrap_or(false)
    }
}
