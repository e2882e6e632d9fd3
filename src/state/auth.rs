//! Auth state for the current browser user, plus its lifecycle operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single source of truth for "who is logged in". Provided as an
//! `RwSignal<AuthState>` from the root `App`; the route guard and user-aware
//! chrome read it, and the login page and topbar drive it through the
//! operations below.
//!
//! LIFECYCLE
//! =========
//! Boot starts at `loading = true`, optionally seeded with the cached user as
//! a rendering hint. `refresh` runs once on mount: with no stored token it
//! resolves to logged-out without a network call; otherwise it revalidates
//! against `GET /auth/me`, committing on success and clearing the session on
//! any failure. `logout` clears synchronously and hard-navigates to the login
//! route so no in-memory page state survives.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::http::RequestError;
use crate::net::types::User;
use crate::state::session;

/// Authentication state tracking the current user and loading status.
///
/// While `loading` is true the identity check has not resolved; consumers
/// must not make access-control decisions yet.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Boot state: still loading, with the cached user as a display hint.
    /// The guard ignores `user` until `loading` clears.
    pub fn boot() -> Self {
        Self { user: session::cached_user(), loading: true }
    }

    /// Terminal state after the identity check resolves.
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }
}

/// Whether a `/auth/me` response issued under `issued_token` may still be
/// committed. A logout or a newer login changes the stored token, and the
/// stale response must then be discarded rather than overwrite newer state.
pub fn should_commit(issued_token: &str, current_token: &str) -> bool {
    !issued_token.is_empty() && issued_token == current_token
}

/// Revalidate the stored session against the backend and resolve `auth`.
///
/// Re-entrant: overlapping calls each re-check the stored token before
/// committing, so the last coherent response wins and a stale one is dropped.
pub async fn refresh(auth: RwSignal<AuthState>) {
    let issued = session::token();
    if issued.is_empty() {
        auth.set(AuthState::resolved(None));
        return;
    }
    match api::fetch_current_user().await {
        Ok(user) => {
            if !should_commit(&issued, &session::token()) {
                return;
            }
            session::save(&issued, &user);
            auth.set(AuthState::resolved(Some(user)));
        }
        Err(err) => {
            if !should_commit(&issued, &session::token()) {
                return;
            }
            leptos::logging::warn!("session refresh failed: {err}");
            session::clear();
            auth.set(AuthState::resolved(None));
        }
    }
}

/// Exchange credentials for a session and resolve `auth` to the new user.
///
/// Returns the landing path: the server's `redirectTo` when present,
/// otherwise the role's home path.
///
/// # Errors
///
/// Fails with the backend's message on bad credentials or transport failure;
/// the auth state is left untouched in that case.
pub async fn login(
    auth: RwSignal<AuthState>,
    email: &str,
    password: &str,
) -> Result<String, RequestError> {
    let response = api::login(email, password).await?;
    session::save(&response.token, &response.user);
    let destination = response
        .redirect_to
        .unwrap_or_else(|| response.user.role.home_path().to_owned());
    auth.set(AuthState::resolved(Some(response.user)));
    Ok(destination)
}

/// Clear the session and leave the application through a hard navigation to
/// the login route. Takes effect before any in-flight response resolves.
pub fn logout(auth: RwSignal<AuthState>) {
    session::clear();
    auth.set(AuthState::resolved(None));
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}
