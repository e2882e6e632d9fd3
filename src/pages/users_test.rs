use super::*;
use crate::net::types::AccountStatus;

fn account(name: &str, email: &str) -> User {
    User {
        id: "u-1".to_owned(),
        full_name: name.to_owned(),
        email: email.to_owned(),
        role: Role::User,
        status: AccountStatus::Active,
        custom_fields: None,
    }
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn blank_query_matches_every_account() {
    assert!(matches_account(&account("Amal Haddad", "amal@example.com"), ""));
}

#[test]
fn query_matches_name_case_insensitively() {
    assert!(matches_account(&account("Amal Haddad", "amal@example.com"), "haddad"));
    assert!(matches_account(&account("Amal Haddad", "amal@example.com"), "AMAL"));
}

#[test]
fn query_matches_email() {
    assert!(matches_account(&account("Amal Haddad", "amal@example.com"), "example.com"));
}

#[test]
fn query_without_match_hides_account() {
    assert!(!matches_account(&account("Amal Haddad", "amal@example.com"), "noor"));
}

// =============================================================
// Form validation
// =============================================================

#[test]
fn user_form_trims_both_fields() {
    assert_eq!(
        validate_user_form("  Amal Haddad ", " amal@example.com  "),
        Ok(("Amal Haddad".to_owned(), "amal@example.com".to_owned()))
    );
}

#[test]
fn user_form_requires_name() {
    assert_eq!(validate_user_form("  ", "amal@example.com"), Err("Enter a full name."));
}

#[test]
fn user_form_requires_plausible_email() {
    assert_eq!(validate_user_form("Amal", ""), Err("Enter a valid email address."));
    assert_eq!(validate_user_form("Amal", "not-an-email"), Err("Enter a valid email address."));
}

// =============================================================
// Role options
// =============================================================

#[test]
fn role_from_option_round_trips_every_option() {
    for (role, name) in ROLE_OPTIONS {
        assert_eq!(role_from_option(name), Some(*role));
    }
    assert_eq!(role_from_option("SUPERUSER"), None);
}
