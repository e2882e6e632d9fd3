use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_home_path_is_total() {
    assert_eq!(Role::Admin.home_path(), "/admin");
    assert_eq!(Role::Dpo.home_path(), "/dpo");
    assert_eq!(Role::User.home_path(), "/user");
}

#[test]
fn role_parses_screaming_wire_names() {
    assert_eq!(serde_json::from_str::<Role>("\"ADMIN\"").unwrap(), Role::Admin);
    assert_eq!(serde_json::from_str::<Role>("\"DPO\"").unwrap(), Role::Dpo);
    assert_eq!(serde_json::from_str::<Role>("\"USER\"").unwrap(), Role::User);
}

#[test]
fn role_rejects_unknown_wire_names() {
    assert!(serde_json::from_str::<Role>("\"ROOT\"").is_err());
}

// =============================================================
// User wire shape
// =============================================================

#[test]
fn user_reads_camel_case_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "fullName": "Amal Haddad",
        "email": "amal@example.com",
        "role": "DPO",
        "status": "ACTIVE",
    }))
    .unwrap();
    assert_eq!(user.full_name, "Amal Haddad");
    assert_eq!(user.role, Role::Dpo);
    assert_eq!(user.status, AccountStatus::Active);
    assert!(user.custom_fields.is_none());
}

#[test]
fn user_carries_custom_fields_untouched() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-2",
        "fullName": "Noor Said",
        "email": "noor@example.com",
        "role": "USER",
        "status": "INACTIVE",
        "customFields": { "department": "Finance" },
    }))
    .unwrap();
    assert_eq!(
        user.custom_fields,
        Some(serde_json::json!({ "department": "Finance" }))
    );
}

#[test]
fn login_response_reads_optional_redirect() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "token": "tok-1",
        "user": {
            "id": "u-1",
            "fullName": "Amal Haddad",
            "email": "amal@example.com",
            "role": "ADMIN",
            "status": "ACTIVE",
        },
        "redirectTo": "/admin",
    }))
    .unwrap();
    assert_eq!(resp.redirect_to.as_deref(), Some("/admin"));
}

// =============================================================
// Status enums
// =============================================================

#[test]
fn compliance_status_wire_round_trip() {
    for status in ComplianceStatus::all() {
        assert_eq!(ComplianceStatus::from_wire(status.wire_name()), Some(status));
    }
    assert_eq!(ComplianceStatus::from_wire("UNKNOWN"), None);
}

#[test]
fn case_category_wire_round_trip() {
    for category in CaseCategory::all() {
        assert_eq!(CaseCategory::from_wire(category.wire_name()), Some(category));
    }
    assert_eq!(CaseCategory::from_wire("SOMETHING_ELSE"), None);
}

#[test]
fn dpia_status_awaiting_review_covers_queue_states() {
    assert!(DpiaStatus::Submitted.awaiting_review());
    assert!(DpiaStatus::InReview.awaiting_review());
    assert!(!DpiaStatus::Draft.awaiting_review());
    assert!(!DpiaStatus::Approved.awaiting_review());
    assert!(!DpiaStatus::Rejected.awaiting_review());
}

#[test]
fn dashboard_summary_defaults_to_zero_counts() {
    let summary: DashboardSummary = serde_json::from_value(serde_json::json!({
        "compliant": 0,
        "partial": 0,
        "missing": 0,
        "notAssessed": 0,
        "openCases": 0,
        "dpiaInReview": 0,
    }))
    .unwrap();
    assert!(summary.risk_cells.is_empty());
}
