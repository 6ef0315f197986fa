//! OpenAI Chat Completions API呼び出し
//!
//! リクエスト/レスポンスのワイヤ型はreceipt_ai_commonと共有

use std::time::Duration;

use crate::error::{ReceiptAiError, Result};
use crate::extractor::ExtractionParams;
use receipt_ai_common::{ChatRequest, ChatResponse, OPENAI_API_URL};

/// Chat Completions APIを1回呼び出し、最初の候補の本文を返す
pub async fn call_chat_api(
    params: &ExtractionParams,
    request: &ChatRequest,
    verbose: bool,
) -> Result<String> {
    if verbose {
        let body_len = serde_json::to_string(request).map(|b| b.len()).unwrap_or(0);
        println!("  リクエスト長: {} chars", body_len);
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(params.timeout_seconds))
        .build()?;

    let response = client
        .post(OPENAI_API_URL)
        .bearer_auth(&params.api_key)
        .json(request)
        .send()
        .await
        .map_err(|e| ReceiptAiError::ApiCall(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ReceiptAiError::ApiCall(format!(
            "status {}: {}",
            status, body
        )));
    }

    let chat: ChatResponse = response
        .json()
        .await
        .map_err(|e| ReceiptAiError::ApiParse(e.to_string()))?;

    if chat.truncated() {
        return Err(ReceiptAiError::Truncated(request.max_tokens));
    }

    chat.content()
        .map(|text| text.to_string())
        .ok_or_else(|| ReceiptAiError::ApiParse("レスポンスが空です".into()))
}
