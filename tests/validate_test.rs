//! Receipt検証の仕様テスト
//!
//! 明細合計とsubtotalの不変条件、必須/任意フィールドの扱いを検証

use receipt_ai_common::{Error, Receipt};
use serde_json::json;

/// 明細合計 == subtotal なら検証成功
#[test]
fn test_consistent_subtotal_validates() {
    let value = json!({
        "items": [
            {"name": "Latte", "item_price": 10.0, "item_quantity": 1, "line_total": 10.0},
            {"name": "Bagel", "item_price": 5.5, "item_quantity": 1, "line_total": 5.5}
        ],
        "total": 17.0,
        "subtotal": 15.5
    });

    let receipt = Receipt::validate(&value).unwrap();
    assert_eq!(receipt.computed_item_sum(), 15.5);
    assert_eq!(receipt.subtotal, Some(15.5));
}

/// 明細合計 != subtotal なら不変条件エラー（両方の値をメッセージに含む）
#[test]
fn test_inconsistent_subtotal_fails() {
    let value = json!({
        "items": [
            {"name": "Latte", "item_price": 10.0, "item_quantity": 1, "line_total": 10.0},
            {"name": "Bagel", "item_price": 5.5, "item_quantity": 1, "line_total": 5.5}
        ],
        "total": 16.0,
        "subtotal": 16.0
    });

    let error = Receipt::validate(&value).unwrap_err();
    assert!(matches!(error, Error::TotalMismatch { .. }));

    // メッセージは「総合計」と計算値の両方を含む（文言は元実装のまま）
    let message = format!("{}", error);
    assert!(message.contains("16"));
    assert!(message.contains("15.5"));
    assert!(message.contains("does not match the sum of item prices"));
}

/// 任意フィールドの欠落は「未印字」であり0ではない
#[test]
fn test_optional_fields_absent() {
    let value = json!({
        "items": [
            {"name": "Latte", "item_price": 5.0, "item_quantity": 2, "line_total": 10.0}
        ],
        "total": 10.0,
        "subtotal": 10.0
    });

    let receipt = Receipt::validate(&value).unwrap();
    assert_eq!(receipt.tax, None);
    assert_eq!(receipt.tip_gratuity, None);
    assert_eq!(receipt.surcharge, None);
    assert_eq!(receipt.service_charge, None);
    assert_eq!(receipt.line_total, None);

    // 表示用JSONでもnullのまま（0にならない）
    let json = serde_json::to_string(&receipt).unwrap();
    assert!(json.contains("\"tax\":null"));
    assert!(!json.contains("\"tax\":0"));
}

/// 必須フィールド欠落は型エラーであり、不変条件エラーにはならない
#[test]
fn test_missing_required_field_is_schema_error() {
    let missing_items = json!({"total": 10.0, "subtotal": 10.0});
    let error = Receipt::validate(&missing_items).unwrap_err();
    assert!(matches!(error, Error::Schema { .. }));

    let missing_total = json!({"items": [], "subtotal": 0.0});
    let error = Receipt::validate(&missing_total).unwrap_err();
    match error {
        Error::Schema { ref path, .. } => assert_eq!(path, "total"),
        ref other => panic!("Expected Schema error, got {:?}", other),
    }
}

/// 空の明細 + subtotal 0.00 は有効（空列の合計は0）
#[test]
fn test_empty_items_validates() {
    let value = json!({
        "items": [],
        "total": 0.0,
        "subtotal": 0.0
    });

    let receipt = Receipt::validate(&value).unwrap();
    assert!(receipt.items.is_empty());
    assert_eq!(receipt.total, 0.0);
}

/// 同じ候補を2回検証しても構造的に等しいReceiptになる
#[test]
fn test_validation_idempotent() {
    let value = json!({
        "items": [
            {"name": "Latte", "item_price": 5.0, "item_quantity": 2, "line_total": 10.0}
        ],
        "total": 10.8,
        "tax": 0.8,
        "subtotal": 10.0
    });

    let first = Receipt::validate(&value).unwrap();
    let second = Receipt::validate(&value).unwrap();
    assert_eq!(first, second);
}

/// 明細の並び順は保持される（レシート上の印字順）
#[test]
fn test_item_order_preserved() {
    let value = json!({
        "items": [
            {"name": "C", "item_price": 3.0, "item_quantity": 1, "line_total": 3.0},
            {"name": "A", "item_price": 1.0, "item_quantity": 1, "line_total": 1.0},
            {"name": "B", "item_price": 2.0, "item_quantity": 1, "line_total": 2.0}
        ],
        "total": 6.0,
        "subtotal": 6.0
    });

    let receipt = Receipt::validate(&value).unwrap();
    let names: Vec<&str> = receipt.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

/// 単価×数量と行合計の関係は検証しない（行合計のみを合算）
#[test]
fn test_line_total_relation_not_enforced() {
    let value = json!({
        "items": [
            {"name": "Latte", "item_price": 5.0, "item_quantity": 2, "line_total": 7.0}
        ],
        "total": 7.0,
        "subtotal": 7.0
    });

    // 5.0 * 2 != 7.0 だがsubtotalと整合するので有効
    let receipt = Receipt::validate(&value).unwrap();
    assert_eq!(receipt.items[0].line_total, 7.0);
}
