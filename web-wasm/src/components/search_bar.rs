//! 検索バーコンポーネント（検索欄・トレンドタグ）

use leptos::prelude::*;
use recipe_browser_common::TRENDING_TAGS;

/// 検索欄の入力値は親が持つ（詳細ページから戻っても残る）
#[component]
pub fn SearchBar(query: RwSignal<String>, on_search: Callback<String>) -> impl IntoView {
    let submit = move || on_search.run(query.get_untracked());

    view! {
        <div class="search-section">
            <div class="search-box">
                <input
                    type="text"
                    id="search-input"
                    placeholder="Search recipes (e.g. pasta, chicken curry)..."
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        query.set(event_target_value(&ev));
                    }
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <button class="btn btn-primary" on:click=move |_| submit()>
                    "Search"
                </button>
            </div>

            <div class="trending-tags">
                <span class="text-muted">"Trending:"</span>
                {TRENDING_TAGS
                    .iter()
                    .map(|tag| {
                        view! {
                            <button
                                class="tag-btn"
                                on:click=move |_| {
                                    query.set(tag.query.to_string());
                                    submit();
                                }
                            >
                                {tag.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
