//! Inline failure banner with a retry action.

use leptos::prelude::*;

/// Red-toned banner rendered by pages when a data fetch fails. The message is
/// the one extracted from the backend response; retry re-runs the fetch.
#[component]
pub fn ErrorBanner(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-banner">
            <span class="error-banner__message">{message}</span>
            <button class="btn error-banner__retry" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}
