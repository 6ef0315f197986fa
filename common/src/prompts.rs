//! プロンプト定義
//!
//! CLIとWeb(WASM)で共有される固定プロンプト。抽出指示は呼び出し時に
//! 変更できない（画像URLだけが可変）。

/// レシート抽出の指示文
///
/// 明細の品名・数量・単価・行合計を抽出させる。レシート上で明細が
/// 視覚的に順不同に並ぶ場合があることを明示する。
pub const EXTRACTION_PROMPT: &str = "Analyze the image carefully. Return line items names, quantities, prices, and totals, and be careful for out-of-order items.";

/// 検証エラー後の再依頼用プロンプト
///
/// 構造化出力が検証を通らなかった場合、エラー内容を添えて
/// 1回だけ再抽出を依頼する
pub fn build_retry_prompt(error: &str) -> String {
    format!(
        "{}\n\nYour previous answer failed validation: {}. Re-read the receipt and return a corrected result.",
        EXTRACTION_PROMPT, error
    )
}
