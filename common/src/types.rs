//! レシート抽出結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Item: レシートの明細1行
//! - Receipt: レシート全体の抽出結果
//!
//! どちらも不変値。生成は `Receipt::validate`（validate.rs）経由のみを想定し、
//! 検証済みのインスタンスだけが外部に渡る。

use serde::{Deserialize, Serialize};

/// レシートの明細1行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// 品名
    pub name: String,

    /// 単価（符号・範囲の制約なし。負値・0もそのまま受理）
    pub item_price: f64,

    /// 数量
    pub item_quantity: i64,

    /// 行合計（単価×数量の関係は検証しない。subtotalとの整合のみ検証）
    pub line_total: f64,
}

/// レシート全体の抽出結果
///
/// `items` と `total` は必須。Option のフィールドは
/// 「レシートに印字されていない」を意味し、0 とは区別する。
/// 表示時も null のまま出力する（absent を可視化）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// 明細（印字順。空も可）
    pub items: Vec<Item>,

    /// 印字された総合計
    pub total: f64,

    pub tip_gratuity: Option<f64>,
    pub tax: Option<f64>,
    pub subtotal: Option<f64>,
    pub line_total: Option<f64>,
    pub surcharge: Option<f64>,
    pub service_charge: Option<f64>,
}

impl Receipt {
    /// 明細の行合計の総和
    pub fn computed_item_sum(&self) -> f64 {
        self.items.iter().map(|item| item.line_total).sum()
    }
}
