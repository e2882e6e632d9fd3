//! Dashboard stat card with an optional percentage bar.

use leptos::prelude::*;

/// Single aggregate number with label and, when given, a percentage bar.
#[component]
pub fn StatCard(
    label: &'static str,
    value: String,
    #[prop(into, optional)] percent: Option<u8>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
            {percent.map(|pct| {
                view! {
                    <div class="stat-card__bar">
                        <div
                            class="stat-card__bar-fill"
                            style:width=format!("{pct}%")
                        ></div>
                    </div>
                }
            })}
        </div>
    }
}
