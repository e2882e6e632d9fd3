//! Per-navigation access control for protected route subtrees.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page wraps its content in [`RouteGuard`]. The decision is
//! recomputed from the auth signal on each navigation, so a role change
//! picked up by the next refresh is reflected on the next route transition
//! without a full reload.
//!
//! While the boot identity check is unresolved the guard renders a neutral
//! placeholder and never redirects; treating "unknown" as "logged out" would
//! bounce a valid session to the login page on every hard refresh.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::loading_panel::LoadingPanel;
use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Roles allowed into the `/admin` subtree.
pub const ADMIN_AREA: &[Role] = &[Role::Admin, Role::Dpo];
/// Roles allowed into `/dpo`.
pub const DPO_AREA: &[Role] = &[Role::Dpo];
/// Roles allowed into the `/user` subtree.
pub const PORTAL_AREA: &[Role] = &[Role::User];

/// Outcome of one navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Identity check unresolved; render a placeholder, do not redirect.
    Pending,
    /// No authenticated user; steer to the login route.
    RedirectLogin,
    /// Authenticated but the role is not in the allow-list; steer to the
    /// role's own landing page.
    RedirectHome(Role),
    /// Render the requested subtree.
    Grant,
}

/// Decide access for the current auth state against a route's allow-list.
/// An empty allow-list admits any authenticated user.
pub fn decide(state: &AuthState, allowed: &[Role]) -> RouteDecision {
    if state.loading {
        return RouteDecision::Pending;
    }
    let Some(user) = state.user.as_ref() else {
        return RouteDecision::RedirectLogin;
    };
    if !allowed.is_empty() && !allowed.contains(&user.role) {
        return RouteDecision::RedirectHome(user.role);
    }
    RouteDecision::Grant
}

/// History-replacing navigation; denied destinations leave no back entry.
pub fn replace_navigation() -> NavigateOptions {
    NavigateOptions { replace: true, ..Default::default() }
}

/// Gate a route subtree behind a role allow-list.
#[component]
pub fn RouteGuard(
    /// Roles admitted into this subtree; empty admits any authenticated user.
    allowed: &'static [Role],
    children: ChildrenFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let navigate = use_navigate();
    Effect::new(move || match decide(&auth.get(), allowed) {
        RouteDecision::RedirectLogin => navigate("/login", replace_navigation()),
        RouteDecision::RedirectHome(role) => navigate(role.home_path(), replace_navigation()),
        RouteDecision::Pending | RouteDecision::Grant => {}
    });

    view! {
        {move || match decide(&auth.get(), allowed) {
            RouteDecision::Grant => children().into_any(),
            // Pending and both redirect states show the same neutral panel;
            // denied access is silent steering, never an error message.
            _ => view! { <LoadingPanel/> }.into_any(),
        }}
    }
}

/// Fallback view for unknown paths: replace-redirect to the login route.
#[component]
pub fn RedirectToLogin() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        navigate("/login", replace_navigation());
    });
    view! { <LoadingPanel/> }
}
