//! Neutral loading placeholder.

use leptos::prelude::*;

/// Shown while auth or page data is unresolved. Deliberately free of any
/// logged-in/logged-out framing so it is safe during the boot identity check.
#[component]
pub fn LoadingPanel() -> impl IntoView {
    view! {
        <div class="loading-panel">
            <span class="loading-panel__spinner"></span>
            <span class="loading-panel__label">"Loading..."</span>
        </div>
    }
}
