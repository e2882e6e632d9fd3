//! Page shells wrapping route content in console chrome.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::components::topbar::TopBar;

/// Admin area chrome: topbar plus collapsible sidebar around the content.
#[component]
pub fn AdminShell(
    /// Path of the page inside the shell, for the sidebar highlight.
    active: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="shell shell--admin">
            <TopBar/>
            <div class="shell__body">
                <Sidebar active=active/>
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}

/// Portal chrome: topbar only; end users get no admin navigation.
#[component]
pub fn PortalShell(children: Children) -> impl IntoView {
    view! {
        <div class="shell shell--portal">
            <TopBar/>
            <main class="shell__content">{children()}</main>
        </div>
    }
}
