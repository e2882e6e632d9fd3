//! Placeholder for backend capabilities that have not shipped yet.

use leptos::prelude::*;

/// Rendered when a portal request reports `missing`: the backend route does
/// not exist yet, which is an expected deployment state rather than an error.
#[component]
pub fn MissingFeaturePanel(
    /// Short name of the capability, e.g. `"Case tracking"`.
    title: &'static str,
) -> impl IntoView {
    view! {
        <div class="missing-feature">
            <h2 class="missing-feature__title">{title}</h2>
            <p class="missing-feature__body">
                "This service is not connected yet. Check back after the next platform update."
            </p>
        </div>
    }
}
