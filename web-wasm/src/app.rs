//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use recipe_browser_common::{
    execute, render_detail, render_results, BrowserState, RecipeId, Request, ViewMode,
};
use wasm_bindgen_futures::spawn_local;

use crate::api::SpoonacularClient;
use crate::components::{
    category_grid::CategoryGrid,
    header::Header,
    loading_overlay::LoadingOverlay,
    recipe_detail::RecipeDetailPanel,
    recipe_grid::RecipeGrid,
    search_bar::SearchBar,
};

/// ページ全体を再読み込み（エラー画面の再試行）
fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::error!("reload failed: {}", crate::api::describe_js_error(&e));
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let client = SpoonacularClient::from_build_env();
    let state = RwSignal::new(BrowserState::new());
    // 詳細ページ表示中は SearchBar が破棄されるため入力値はここで保持
    let query = RwSignal::new(String::new());

    // 発行済みリクエストを実行し、完了時に状態へ反映
    let dispatch = Callback::new(move |request: Option<Request>| {
        let Some(request) = request else {
            return;
        };
        let client = client.clone();
        spawn_local(async move {
            let response = execute(&client, &request).await;
            state.update(|s| {
                s.complete(request.token, response);
            });
        });
    });

    let on_search = Callback::new(move |text: String| {
        dispatch.run(state.try_update(|s| s.begin_search(&text)).flatten());
    });

    let on_category = Callback::new(move |category: String| {
        dispatch.run(state.try_update(|s| s.begin_category(&category)).flatten());
    });

    let on_select = Callback::new(move |id: RecipeId| {
        dispatch.run(state.try_update(|s| s.begin_detail(id)));
    });

    let on_back = Callback::new(move |_: ()| state.update(|s| s.go_back()));
    let on_retry = Callback::new(move |_: ()| reload_page());

    let mode = Memo::new(move |_| state.with(|s| s.mode()));
    let loading = Signal::derive(move || state.with(|s| s.is_loading()));
    let categories_visible = move || state.with(|s| s.categories_visible());
    let results_title = Signal::derive(move || state.with(|s| s.results_title().to_string()));
    let results = Signal::derive(move || state.with(|s| render_results(s.results())));
    let detail = Signal::derive(move || state.with(|s| render_detail(s.detail())));

    view! {
        <div class="container">
            <Header />

            <Show
                when=move || mode.get() != ViewMode::RecipeDetail
                fallback=move || view! { <RecipeDetailPanel panel=detail on_back=on_back /> }
            >
                <main class="main-page">
                    <SearchBar query=query on_search=on_search />

                    <Show when=categories_visible>
                        <CategoryGrid on_select=on_category />
                    </Show>

                    <Show
                        when=move || mode.get() == ViewMode::ResultsList
                        fallback=|| view! {
                            <div class="welcome-message">
                                <h2>"Welcome to Recipe Finder!"</h2>
                                <p class="text-muted">
                                    "Search for a dish or pick a category to get started"
                                </p>
                            </div>
                        }
                    >
                        <RecipeGrid
                            title=results_title
                            results=results
                            on_select=on_select
                            on_retry=on_retry
                        />
                    </Show>
                </main>
            </Show>

            <LoadingOverlay loading=loading />
        </div>
    }
}
