//! レシート抽出モジュール
//!
//! 1回の抽出 = 1回のリクエスト/レスポンスサイクル。中間状態なし、
//! キャンセルなし、再開なし。構造化出力が検証を通らなかった場合のみ、
//! エラー内容を添えて上限回数まで再依頼する。

mod openai;

use crate::config::Config;
use crate::error::{ReceiptAiError, Result};
use receipt_ai_common::{parse_receipt_response, ChatRequest, Receipt, VALIDATION_RETRIES};

/// 抽出に必要なパラメータ一式
///
/// 認証情報・モデル・出力上限は呼び出しごとに明示的に渡す
/// （グローバル状態にしない）
#[derive(Debug, Clone)]
pub struct ExtractionParams {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout_seconds: u64,
}

impl ExtractionParams {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            api_key: config.get_api_key()?,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            timeout_seconds: config.timeout_seconds,
        })
    }
}

/// レシート画像URLから検証済みReceiptを抽出する
///
/// 画像の取得・デコードはせず、URLをそのままモデルに渡す。
/// 返るReceiptは必ずsubtotal不変条件の検査を通過している。
pub async fn extract(params: &ExtractionParams, image_url: &str, verbose: bool) -> Result<Receipt> {
    if image_url.trim().is_empty() {
        return Err(ReceiptAiError::EmptyImageUrl);
    }

    let mut request = ChatRequest::extraction(&params.model, params.max_tokens, image_url);
    let mut retries_left = VALIDATION_RETRIES;

    loop {
        let content = openai::call_chat_api(params, &request, verbose).await?;

        if verbose {
            println!("  レスポンス長: {} chars", content.len());
        }

        match parse_receipt_response(&content) {
            Ok(receipt) => return Ok(receipt),
            Err(error) if retries_left > 0 => {
                retries_left -= 1;
                if verbose {
                    println!("  検証エラーのため再依頼: {}", error);
                }
                request = ChatRequest::extraction_retry(
                    &params.model,
                    params.max_tokens,
                    image_url,
                    &error.to_string(),
                );
            }
            Err(error) => return Err(error.into()),
        }
    }
}
