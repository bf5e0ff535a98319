//! ローディング表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn LoadingOverlay(loading: Signal<bool>) -> impl IntoView {
    view! {
        <div class="loading-overlay" class:hidden=move || !loading.get()>
            <div class="spinner"></div>
            <p class="loading-text">"Loading recipes..."</p>
        </div>
    }
}
