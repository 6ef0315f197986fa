//! 構造化出力のレスポンススキーマ宣言
//!
//! OpenAIのjson_schemaレスポンスフォーマット。モデルには自由文ではなく
//! このスキーマに適合した出力を返すよう指示する。strictモードでは
//! 全フィールドをrequiredに列挙する必要があるため、任意フィールドは
//! `["number", "null"]` として宣言し、「未印字」をnullで受け取る。

use serde_json::{json, Value};

/// 任意の金額フィールド（未印字はnull）
const OPTIONAL_CHARGES: &[&str] = &[
    "tip_gratuity",
    "tax",
    "subtotal",
    "line_total",
    "surcharge",
    "service_charge",
];

/// Receiptスキーマのresponse_formatブロックを構築する
pub fn response_format() -> Value {
    let mut properties = json!({
        "items": {
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "item_price": { "type": "number" },
                    "item_quantity": { "type": "integer" },
                    "line_total": { "type": "number" }
                },
                "required": ["name", "item_price", "item_quantity", "line_total"],
                "additionalProperties": false
            }
        },
        "total": { "type": "number" }
    });

    for key in OPTIONAL_CHARGES {
        properties[*key] = json!({ "type": ["number", "null"] });
    }

    let mut required: Vec<&str> = vec!["items", "total"];
    required.extend(OPTIONAL_CHARGES);

    json!({
        "type": "json_schema",
        "json_schema": {
            "name": "receipt",
            "strict": true,
            "schema": {
                "type": "object",
                "properties": properties,
                "required": required,
                "additionalProperties": false
            }
        }
    })
}
