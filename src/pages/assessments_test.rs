use super::*;

fn requirement(id: &str, status: ComplianceStatus) -> Requirement {
    Requirement {
        id: id.to_owned(),
        control: "Records of processing are maintained".to_owned(),
        status,
        notes: None,
    }
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn blank_query_matches_everything() {
    assert!(matches_query("Consent records", ""));
    assert!(matches_query("Consent records", "   "));
}

#[test]
fn query_matches_case_insensitively() {
    assert!(matches_query("Consent records", "CONSENT"));
    assert!(matches_query("Consent records", "records"));
}

#[test]
fn query_requires_substring() {
    assert!(!matches_query("Consent records", "retention"));
}

// =============================================================
// Domain progress
// =============================================================

#[test]
fn empty_domain_has_zero_progress() {
    assert_eq!(domain_progress(&[]), 0);
}

#[test]
fn progress_counts_any_reviewed_status() {
    let requirements = [
        requirement("r-1", ComplianceStatus::Compliant),
        requirement("r-2", ComplianceStatus::Missing),
        requirement("r-3", ComplianceStatus::Partial),
        requirement("r-4", ComplianceStatus::NotAssessed),
    ];
    assert_eq!(reviewed_count(&requirements), 3);
    assert_eq!(domain_progress(&requirements), 75);
}

#[test]
fn fully_reviewed_domain_is_complete() {
    let requirements = [
        requirement("r-1", ComplianceStatus::Compliant),
        requirement("r-2", ComplianceStatus::Missing),
    ];
    assert_eq!(domain_progress(&requirements), 100);
}

// =============================================================
// Dialog validation
// =============================================================

#[test]
fn assessment_title_is_trimmed() {
    assert_eq!(
        validate_assessment_title("  2026 annual review  "),
        Ok("2026 annual review".to_owned())
    );
}

#[test]
fn blank_assessment_title_is_rejected() {
    assert_eq!(validate_assessment_title("   "), Err("Enter an assessment title."));
}
