//! 設定パネルコンポーネント
//!
//! APIキーはセッション中のみシグナルに保持し、永続化しない

use leptos::prelude::*;

#[component]
pub fn SettingsPanel(
    api_key: ReadSignal<String>,
    set_api_key: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="settings-panel">
            <div class="form-group">
                <label for="api-key">"OpenAI API Key"</label>
                <input
                    type="password"
                    id="api-key"
                    placeholder="API Keyを入力..."
                    prop:value=move || api_key.get()
                    on:input=move |ev| {
                        set_api_key.set(event_target_value(&ev));
                    }
                />
                <a
                    href="https://platform.openai.com/api-keys"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="api-key-link"
                >
                    "APIキーを取得 →"
                </a>
            </div>
        </div>
    }
}
