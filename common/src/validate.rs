//! Receiptの検証付き構築
//!
//! モデルが返した生のJSON値から、必須フィールド・型・不変条件を
//! 検証したうえでReceiptを構築する。検証を通らない値からは
//! Receiptインスタンスを一切生成しない。

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::types::{Item, Receipt};

impl Receipt {
    /// 生のJSON値からReceiptを構築する
    ///
    /// 検証内容:
    /// 1. `items`・`total` の存在と型（欠落・型不一致はフィールドパス付きエラー）
    /// 2. 各明細の必須フィールド（name, item_price, item_quantity, line_total）
    /// 3. 不変条件: 明細のline_total合計 == subtotal（厳密一致、許容誤差なし）
    ///
    /// subtotalが未印字（欠落またはnull）の場合、不変条件の検査対象が
    /// 存在しないため3はスキップされる。
    pub fn validate(value: &Value) -> Result<Receipt> {
        let map = as_object(value, "$")?;

        let items_value = require(map, "$", "items")?;
        let items_array = items_value.as_array().ok_or_else(|| Error::Schema {
            path: "items".to_string(),
            reason: type_mismatch("array", items_value),
        })?;

        let mut items = Vec::with_capacity(items_array.len());
        for (index, item_value) in items_array.iter().enumerate() {
            let item_path = format!("items[{}]", index);
            items.push(validate_item(item_value, &item_path)?);
        }

        let total = require_f64(map, "$", "total")?;

        let receipt = Receipt {
            items,
            total,
            tip_gratuity: optional_f64(map, "tip_gratuity")?,
            tax: optional_f64(map, "tax")?,
            subtotal: optional_f64(map, "subtotal")?,
            line_total: optional_f64(map, "line_total")?,
            surcharge: optional_f64(map, "surcharge")?,
            service_charge: optional_f64(map, "service_charge")?,
        };

        // 不変条件: 明細合計とsubtotalの厳密一致
        if let Some(subtotal) = receipt.subtotal {
            let computed = receipt.computed_item_sum();
            if computed != subtotal {
                return Err(Error::TotalMismatch {
                    total: receipt.total,
                    computed,
                });
            }
        }

        Ok(receipt)
    }
}

fn validate_item(value: &Value, path: &str) -> Result<Item> {
    let map = as_object(value, path)?;

    Ok(Item {
        name: require_str(map, path, "name")?,
        item_price: require_f64(map, path, "item_price")?,
        item_quantity: require_i64(map, path, "item_quantity")?,
        line_total: require_f64(map, path, "line_total")?,
    })
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| Error::Schema {
        path: path.to_string(),
        reason: type_mismatch("object", value),
    })
}

fn require<'a>(map: &'a Map<String, Value>, path: &str, key: &str) -> Result<&'a Value> {
    map.get(key).ok_or_else(|| Error::Schema {
        path: field_path(path, key),
        reason: "required field is missing".to_string(),
    })
}

fn require_str(map: &Map<String, Value>, path: &str, key: &str) -> Result<String> {
    let value = require(map, path, key)?;
    value
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| Error::Schema {
            path: field_path(path, key),
            reason: type_mismatch("string", value),
        })
}

fn require_f64(map: &Map<String, Value>, path: &str, key: &str) -> Result<f64> {
    let value = require(map, path, key)?;
    value.as_f64().ok_or_else(|| Error::Schema {
        path: field_path(path, key),
        reason: type_mismatch("number", value),
    })
}

fn require_i64(map: &Map<String, Value>, path: &str, key: &str) -> Result<i64> {
    let value = require(map, path, key)?;
    value.as_i64().ok_or_else(|| Error::Schema {
        path: field_path(path, key),
        reason: type_mismatch("integer", value),
    })
}

/// 任意フィールド: 欠落・nullは「未印字」としてNone
fn optional_f64(map: &Map<String, Value>, key: &str) -> Result<Option<f64>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_f64().map(Some).ok_or_else(|| Error::Schema {
            path: key.to_string(),
            reason: type_mismatch("number or null", value),
        }),
    }
}

fn field_path(path: &str, key: &str) -> String {
    if path == "$" {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn type_mismatch(expected: &str, actual: &Value) -> String {
    let actual_type = match actual {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    format!("expected {}, got {}", expected, actual_type)
}
