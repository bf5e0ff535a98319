//! レシピ詳細パネル

use leptos::prelude::*;
use recipe_browser_common::{DetailPanel, DetailView};

#[component]
pub fn RecipeDetailPanel(panel: Signal<DetailPanel>, on_back: Callback<()>) -> impl IntoView {
    view! {
        <section class="recipe-detail-page">
            <button class="btn btn-secondary back-btn" on:click=move |_| on_back.run(())>
                "← Back to recipes"
            </button>
            <div class="recipe-detail-content">
                {move || match panel.get() {
                    DetailPanel::Empty => ().into_any(),
                    DetailPanel::Recipe(recipe) => view! { <RecipeBody recipe=recipe /> }.into_any(),
                    DetailPanel::Error { heading, message } => view! {
                        <div class="error-state">
                            <h2>"⚠️ "{heading}</h2>
                            <p>{message}</p>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </section>
    }
}

#[component]
fn RecipeBody(recipe: DetailView) -> impl IntoView {
    let DetailView {
        title,
        image,
        time_label,
        servings_label,
        likes_label,
        ingredients,
        instructions,
    } = recipe;
    let alt = title.clone();

    view! {
        <div class="recipe-detail">
            <h2>{title}</h2>
            <img class="recipe-image" src=image alt=alt />
            <div class="recipe-meta">
                <span>"⏱ "{time_label}</span>
                <span>"🍽 "{servings_label}</span>
                <span>"❤ "{likes_label}</span>
            </div>
            <div class="recipe-section">
                <h3>"🥕 Ingredients"</h3>
                <ul class="ingredients">
                    {ingredients
                        .into_iter()
                        .map(|line| view! { <li>{line}</li> })
                        .collect_view()}
                </ul>
            </div>
            <div class="recipe-section">
                <h3>"📝 Instructions"</h3>
                <div class="instructions">{instructions}</div>
            </div>
        </div>
    }
}
