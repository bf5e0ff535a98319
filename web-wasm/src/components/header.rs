//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"🍳 Recipe Finder"</h1>
            <p class="tagline">"Discover delicious recipes from around the world"</p>
        </header>
    }
}
