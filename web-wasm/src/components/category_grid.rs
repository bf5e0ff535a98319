//! カテゴリタイル一覧

use leptos::prelude::*;
use recipe_browser_common::FEATURED_CATEGORIES;

#[component]
pub fn CategoryGrid(on_select: Callback<String>) -> impl IntoView {
    view! {
        <section class="featured-categories">
            <h2>"Popular Categories"</h2>
            <div class="category-grid">
                {FEATURED_CATEGORIES
                    .iter()
                    .map(|category| {
                        view! {
                            <div
                                class="category-card"
                                on:click=move |_| on_select.run(category.query.to_string())
                            >
                                <div class="category-icon">{category.icon}</div>
                                <h3>{category.label}</h3>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
