use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "secret"),
        Ok(("user@example.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_rejects_blank_email() {
    assert_eq!(validate_login_input("   ", "secret"), Err("Enter a valid email address."));
}

#[test]
fn validate_login_input_rejects_email_without_at_sign() {
    assert_eq!(
        validate_login_input("user.example.com", "secret"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("user@example.com", ""), Err("Enter your password."));
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("user@example.com", "  spaced  "),
        Ok(("user@example.com".to_owned(), "  spaced  ".to_owned()))
    );
}
