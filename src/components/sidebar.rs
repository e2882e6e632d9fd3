//! Collapsible admin navigation sidebar.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::prefs;

const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("/admin", "Dashboard", "\u{25A3}"),
    ("/admin/assessments", "Gap assessments", "\u{2713}"),
    ("/admin/dpia", "DPIA", "\u{26A0}"),
    ("/admin/users", "Users", "\u{263A}"),
];

/// Admin area navigation. The collapse preference persists across reloads.
#[component]
pub fn Sidebar(
    /// Path of the page rendering the sidebar, for the active highlight.
    active: &'static str,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let collapsed = move || ui.get().sidebar_collapsed;
    let toggle = move |_| {
        ui.update(|state| state.sidebar_collapsed = !state.sidebar_collapsed);
        prefs::set_sidebar_collapsed(ui.get_untracked().sidebar_collapsed);
    };

    let items = NAV_ITEMS
        .iter()
        .map(|&(href, label, icon)| {
            let is_active = href == active;
            view! {
                <a class="sidebar__link" class:sidebar__link--active=is_active href=href>
                    <span class="sidebar__icon" aria-hidden="true">{icon}</span>
                    <Show when=move || !collapsed()>
                        <span class="sidebar__label">{label}</span>
                    </Show>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="sidebar" class:sidebar--collapsed=collapsed>
            <div class="sidebar__links">{items}</div>
            <button
                class="sidebar__toggle"
                on:click=toggle
                title="Toggle sidebar"
                aria-label="Toggle sidebar"
            >
                {move || if collapsed() { "\u{25B6}" } else { "\u{25C0}" }}
            </button>
        </nav>
    }
}
