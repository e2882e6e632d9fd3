use super::*;
use crate::net::types::{AccountStatus, User};

fn user_with_role(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        full_name: "Amal Haddad".to_owned(),
        email: "amal@example.com".to_owned(),
        role,
        status: AccountStatus::Active,
        custom_fields: None,
    }
}

fn authed(role: Role) -> AuthState {
    AuthState { user: Some(user_with_role(role)), loading: false }
}

// =============================================================
// Decision matrix
// =============================================================

#[test]
fn loading_state_is_pending_even_without_user() {
    let state = AuthState { user: None, loading: true };
    assert_eq!(decide(&state, ADMIN_AREA), RouteDecision::Pending);
}

#[test]
fn loading_state_is_pending_even_with_cached_user_hint() {
    let state = AuthState { user: Some(user_with_role(Role::Admin)), loading: true };
    assert_eq!(decide(&state, ADMIN_AREA), RouteDecision::Pending);
}

#[test]
fn no_user_redirects_to_login() {
    let state = AuthState { user: None, loading: false };
    assert_eq!(decide(&state, ADMIN_AREA), RouteDecision::RedirectLogin);
}

#[test]
fn wrong_role_redirects_to_own_home() {
    assert_eq!(
        decide(&authed(Role::Dpo), PORTAL_AREA),
        RouteDecision::RedirectHome(Role::Dpo)
    );
    assert_eq!(
        decide(&authed(Role::User), ADMIN_AREA),
        RouteDecision::RedirectHome(Role::User)
    );
}

#[test]
fn member_of_allow_list_is_granted() {
    assert_eq!(decide(&authed(Role::Admin), ADMIN_AREA), RouteDecision::Grant);
    assert_eq!(decide(&authed(Role::Dpo), ADMIN_AREA), RouteDecision::Grant);
    assert_eq!(decide(&authed(Role::Dpo), DPO_AREA), RouteDecision::Grant);
    assert_eq!(decide(&authed(Role::User), PORTAL_AREA), RouteDecision::Grant);
}

#[test]
fn admin_is_not_admitted_to_dpo_home() {
    assert_eq!(
        decide(&authed(Role::Admin), DPO_AREA),
        RouteDecision::RedirectHome(Role::Admin)
    );
}

#[test]
fn empty_allow_list_admits_any_authenticated_user() {
    assert_eq!(decide(&authed(Role::User), &[]), RouteDecision::Grant);
    assert_eq!(decide(&authed(Role::Admin), &[]), RouteDecision::Grant);
}

// =============================================================
// Navigation options
// =============================================================

#[test]
fn denied_navigation_replaces_history() {
    assert!(replace_navigation().replace);
}
