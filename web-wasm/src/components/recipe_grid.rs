//! 検索結果（レシピカード一覧・0件・エラー）

use leptos::prelude::*;
use recipe_browser_common::{CardView, RecipeId, ResultsView};

#[component]
pub fn RecipeGrid(
    title: Signal<String>,
    results: Signal<ResultsView>,
    on_select: Callback<RecipeId>,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <section class="results-section">
            <h2 class="results-title">{move || title.get()}</h2>
            <div class="recipes-container">
                {move || match results.get() {
                    ResultsView::Idle => ().into_any(),
                    ResultsView::Cards(cards) => cards
                        .into_iter()
                        .map(|card| view! { <RecipeCard card=card on_select=on_select /> })
                        .collect_view()
                        .into_any(),
                    ResultsView::NoResults { heading, hint } => view! {
                        <div class="error-state">
                            <h2>"🔍 "{heading}</h2>
                            <p>{hint}</p>
                        </div>
                    }
                    .into_any(),
                    ResultsView::Error { heading, message, retry } => view! {
                        <div class="error-state">
                            <h2>"⚠️ "{heading}</h2>
                            <p>{message}</p>
                            {retry.then(|| view! {
                                <button class="btn retry-btn" on:click=move |_| on_retry.run(())>
                                    "🔄 Try Again"
                                </button>
                            })}
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn RecipeCard(card: CardView, on_select: Callback<RecipeId>) -> impl IntoView {
    let CardView { id, title, image, time_label, servings_label } = card;
    let alt = title.clone();

    view! {
        <div class="recipe-card" on:click=move |_| on_select.run(id)>
            <img class="recipe-image" src=image alt=alt loading="lazy" />
            <div class="recipe-info">
                <h3>{title}</h3>
                <div class="recipe-meta">
                    <span>"⏱ "{time_label}</span>
                    <span>"🍽 "{servings_label}</span>
                </div>
            </div>
        </div>
    }
}
