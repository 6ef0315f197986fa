//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 必須フィールドの欠落・型不一致（フィールドパス付き）
    #[error("Schema error at {path}: {reason}")]
    Schema { path: String, reason: String },

    /// 明細合計とsubtotalの不一致
    ///
    /// メッセージは元実装のまま（totalと表記するが比較対象はsubtotal）
    #[error("Total {total} does not match the sum of item prices {computed}")]
    TotalMismatch { total: f64, computed: f64 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_schema() {
        let error = Error::Schema {
            path: "items[0].name".to_string(),
            reason: "expected string".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("items[0].name"));
        assert!(display.contains("expected string"));
    }

    #[test]
    fn test_error_display_total_mismatch() {
        let error = Error::TotalMismatch {
            total: 16.0,
            computed: 15.5,
        };
        let display = format!("{}", error);
        assert_eq!(
            display,
            "Total 16 does not match the sum of item prices 15.5"
        );
    }

    #[test]
    fn test_error_display_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let error = Error::Json(json_error);
        let display = format!("{}", error);
        assert!(display.contains("JSON error"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Parse("テスト".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Parse"));
        assert!(debug.contains("テスト"));
    }
}
