//! Top bar with the signed-in user and the logout action.

use leptos::prelude::*;

use crate::state::auth::{self, AuthState};

/// Console header: product name, current user, sign-out.
#[component]
pub fn TopBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let user_name = move || {
        auth.get()
            .user
            .as_ref()
            .map_or_else(String::new, |user| user.full_name.clone())
    };
    let user_role = move || {
        auth.get()
            .user
            .as_ref()
            .map_or("", |user| match user.role {
                crate::net::types::Role::Admin => "Administrator",
                crate::net::types::Role::Dpo => "Data protection officer",
                crate::net::types::Role::User => "User",
            })
    };

    let on_logout = move |_| auth::logout(auth);

    view! {
        <header class="topbar">
            <span class="topbar__brand">"PDPL Console"</span>
            <span class="topbar__spacer"></span>
            <span class="topbar__user">
                <span class="topbar__user-name">{user_name}</span>
                <span class="topbar__user-role">{user_role}</span>
            </span>
            <button class="btn topbar__logout" on:click=on_logout>
                "Sign out"
            </button>
        </header>
    }
}
