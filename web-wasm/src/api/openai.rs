//! OpenAI API連携（レシート抽出）
//!
//! リクエスト構築・パース・検証は receipt_ai_common を使用し、
//! ここではfetchによる送受信だけを行う

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use receipt_ai_common::{
    parse_receipt_response, ChatRequest, ChatResponse, Receipt, DEFAULT_MODEL, MAX_TOKENS,
    OPENAI_API_URL, VALIDATION_RETRIES,
};

/// Chat Completions API呼び出し（共通処理）
async fn call_chat_api(api_key: &str, request: &ChatRequest) -> Result<String, JsValue> {
    let body = serde_json::to_string(request)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(OPENAI_API_URL, &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    request
        .headers()
        .set("Authorization", &format!("Bearer {}", api_key))?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: ChatResponse = serde_wasm_bindgen::from_value(json)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    if response.truncated() {
        return Err(JsValue::from_str("出力がトークン上限で途切れました"));
    }

    response
        .content()
        .map(|text| text.to_string())
        .ok_or_else(|| JsValue::from_str("Empty response"))
}

/// レシート画像URLを解析して検証済みReceiptを返す
///
/// 検証（必須フィールド・subtotal不変条件）を通らなかった場合は
/// エラー内容を添えて上限回数まで再依頼し、それでも失敗すれば
/// エラー文字列を返す。部分的なReceiptは返さない。
pub async fn extract_receipt(api_key: &str, image_url: &str) -> Result<Receipt, String> {
    if image_url.trim().is_empty() {
        return Err("画像URLが空です".to_string());
    }

    let mut request = ChatRequest::extraction(DEFAULT_MODEL, MAX_TOKENS, image_url);
    let mut retries_left = VALIDATION_RETRIES;

    loop {
        let content = call_chat_api(api_key, &request)
            .await
            .map_err(|e| js_error_message(&e))?;

        match parse_receipt_response(&content) {
            Ok(receipt) => return Ok(receipt),
            Err(error) if retries_left > 0 => {
                retries_left -= 1;
                request = ChatRequest::extraction_retry(
                    DEFAULT_MODEL,
                    MAX_TOKENS,
                    image_url,
                    &error.to_string(),
                );
            }
            Err(error) => return Err(error.to_string()),
        }
    }
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
