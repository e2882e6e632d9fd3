use super::*;

// =============================================================
// Filing form validation
// =============================================================

#[test]
fn case_form_trims_subject_and_description() {
    assert_eq!(
        validate_case_form("  Delete my data  ", "  Please erase my account.  "),
        Ok(("Delete my data".to_owned(), "Please erase my account.".to_owned()))
    );
}

#[test]
fn case_form_requires_subject() {
    assert_eq!(
        validate_case_form("   ", "Please erase my account."),
        Err("Enter a subject for your request.")
    );
}

#[test]
fn case_form_requires_description() {
    assert_eq!(
        validate_case_form("Delete my data", "   "),
        Err("Describe your request.")
    );
}

// =============================================================
// Status chips
// =============================================================

#[test]
fn case_status_classes_are_distinct() {
    let classes = [
        case_status_class(CaseStatus::Open),
        case_status_class(CaseStatus::InReview),
        case_status_class(CaseStatus::Resolved),
        case_status_class(CaseStatus::Rejected),
    ];
    for (i, a) in classes.iter().enumerate() {
        for (j, b) in classes.iter().enumerate() {
            if i != j {
                assert_ne!(a, b);
            }
        }
    }
}
