//! URL入力コンポーネント
//!
//! 解析ボタン1回 = 抽出リクエスト1回。同時実行はしない

use leptos::prelude::*;

#[component]
pub fn UrlInput<FA>(
    url: ReadSignal<String>,
    set_url: WriteSignal<String>,
    is_analyzing: ReadSignal<bool>,
    on_analyze: FA,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone,
{
    let can_analyze = move || !url.get().trim().is_empty() && !is_analyzing.get();

    view! {
        <div class="url-input">
            <div class="form-group">
                <label for="receipt-url">"レシート画像のURL"</label>
                <input
                    type="text"
                    id="receipt-url"
                    placeholder="https://example.com/receipt.jpg"
                    prop:value=move || url.get()
                    on:input=move |ev| {
                        set_url.set(event_target_value(&ev));
                    }
                />
            </div>
            <button
                class="btn btn-primary"
                disabled=move || !can_analyze()
                on:click={
                    let on_analyze = on_analyze.clone();
                    move |_| on_analyze(())
                }
            >
                {move || if is_analyzing.get() { "解析中..." } else { "解析開始" }}
            </button>
        </div>
    }
}
