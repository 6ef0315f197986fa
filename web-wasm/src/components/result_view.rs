//! 結果表示コンポーネント
//!
//! 検証済みReceiptのJSON、または1行のエラーメッセージのどちらかだけを
//! 表示する。部分的なReceiptは表示しない。

use leptos::prelude::*;

/// 1回の抽出の表示状態
#[derive(Clone, PartialEq)]
pub enum ExtractionOutcome {
    /// まだ何も実行していない
    Idle,
    /// 検証済みReceiptのpretty JSON
    Success(String),
    /// 生のエラーテキストを含む1行
    Error(String),
}

#[component]
pub fn ResultView(outcome: ReadSignal<ExtractionOutcome>) -> impl IntoView {
    view! {
        <div class="result-view">
            {move || match outcome.get() {
                ExtractionOutcome::Idle => view! {
                    <p class="text-muted">"レシート画像のURLを入力して解析を開始"</p>
                }.into_any(),
                ExtractionOutcome::Success(json) => view! {
                    <pre class="result-json">{json}</pre>
                }.into_any(),
                ExtractionOutcome::Error(message) => view! {
                    <p class="result-error">{format!("An error occurred: {}", message)}</p>
                }.into_any(),
            }}
        </div>
    }
}
