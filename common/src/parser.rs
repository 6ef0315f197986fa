//! APIレスポンスパーサー
//!
//! モデルのレスポンス本文からJSONを抽出し、検証付きでReceiptに変換する。
//! json_schema指定時は本文がそのままJSONオブジェクトだが、
//! コードフェンスや前後の説明文が混ざるケースにも耐える。

use crate::error::{Error, Result};
use crate::types::Receipt;

/// レスポンスからJSON部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. 生の {...} オブジェクト
/// 3. エラー
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` ブロックを探す
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" の長さ
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // 生の {...} を探す
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("JSONが見つかりません".into()))
}

/// 抽出レスポンスをパースし、検証済みReceiptを返す
///
/// 検証（必須フィールド・型・subtotal不変条件）を通らない場合は
/// Receiptを生成せずエラーを返す。
pub fn parse_receipt_response(response: &str) -> Result<Receipt> {
    let json_str = extract_json(response)?;
    let value: serde_json::Value = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("JSONパースエラー: {}", e)))?;
    Receipt::validate(&value)
}
