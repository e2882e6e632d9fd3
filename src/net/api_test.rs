use super::*;

#[test]
fn requirement_endpoint_formats_expected_path() {
    assert_eq!(
        requirement_endpoint("a-1", "r-9"),
        "/assessments/a-1/requirements/r-9"
    );
}

#[test]
fn dpia_endpoint_formats_expected_path() {
    assert_eq!(dpia_endpoint("d-3"), "/dpia/d-3");
}

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint("u-7"), "/users/u-7");
}

#[test]
fn case_endpoint_formats_expected_path() {
    assert_eq!(case_endpoint("c-2"), "/cases/c-2");
}

#[test]
fn case_attachments_endpoint_formats_expected_path() {
    assert_eq!(case_attachments_endpoint("c-2"), "/cases/c-2/attachments");
}
