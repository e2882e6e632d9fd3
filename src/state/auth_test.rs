use super::*;
use crate::net::types::{AccountStatus, Role};

fn sample_user(role: Role) -> User {
    User {
        id: "u-1".to_owned(),
        full_name: "Amal Haddad".to_owned(),
        email: "amal@example.com".to_owned(),
        role,
        status: AccountStatus::Active,
        custom_fields: None,
    }
}

// =============================================================
// State shape
// =============================================================

#[test]
fn default_state_is_loading_with_no_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn boot_without_browser_storage_has_no_user_hint() {
    let state = AuthState::boot();
    assert!(state.loading);
    assert!(state.user.is_none());
}

#[test]
fn resolved_clears_loading() {
    let state = AuthState::resolved(Some(sample_user(Role::Dpo)));
    assert!(!state.loading);
    assert_eq!(state.user.map(|u| u.role), Some(Role::Dpo));

    let state = AuthState::resolved(None);
    assert!(!state.loading);
    assert!(state.user.is_none());
}

// =============================================================
// Stale-response guard
// =============================================================

#[test]
fn commit_allowed_while_token_unchanged() {
    assert!(should_commit("tok-a", "tok-a"));
}

#[test]
fn commit_rejected_after_logout_cleared_the_token() {
    assert!(!should_commit("tok-a", ""));
}

#[test]
fn commit_rejected_after_a_newer_login_replaced_the_token() {
    assert!(!should_commit("tok-a", "tok-b"));
}

#[test]
fn commit_rejected_for_a_request_issued_without_a_token() {
    assert!(!should_commit("", ""));
}
