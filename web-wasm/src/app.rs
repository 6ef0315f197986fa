//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::openai;
use crate::components::{
    header::Header,
    settings_panel::SettingsPanel,
    url_input::UrlInput,
    result_view::{ExtractionOutcome, ResultView},
};

/// メインアプリケーションコンポーネント
///
/// APIキーと画像URLを入力し、1回の抽出呼び出しの結果
/// （検証済みReceiptのJSONか、1行のエラー）を表示する
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態（APIキーはセッション中のみ保持）
    let (api_key, set_api_key) = signal(String::new());
    let (url, set_url) = signal(String::new());
    let (is_analyzing, set_is_analyzing) = signal(false);
    let (outcome, set_outcome) = signal(ExtractionOutcome::Idle);

    // 解析開始ハンドラ（常に同時実行は1件のみ）
    let on_analyze = move |_| {
        if is_analyzing.get_untracked() {
            return;
        }

        let key = api_key.get_untracked();
        let target_url = url.get_untracked();
        set_is_analyzing.set(true);

        spawn_local(async move {
            match openai::extract_receipt(&key, &target_url).await {
                Ok(receipt) => match serde_json::to_string_pretty(&receipt) {
                    Ok(json) => set_outcome.set(ExtractionOutcome::Success(json)),
                    Err(e) => set_outcome.set(ExtractionOutcome::Error(e.to_string())),
                },
                Err(message) => set_outcome.set(ExtractionOutcome::Error(message)),
            }
            set_is_analyzing.set(false);
        });
    };

    view! {
        <div class="container">
            <Header />

            <SettingsPanel
                api_key=api_key
                set_api_key=set_api_key
            />

            <UrlInput
                url=url
                set_url=set_url
                is_analyzing=is_analyzing
                on_analyze=on_analyze
            />

            <ResultView outcome=outcome />
        </div>
    }
}
