use super::*;

// =============================================================
// Base URL and headers
// =============================================================

#[test]
fn endpoint_joins_path_onto_base() {
    assert_eq!(endpoint("/auth/me"), format!("{}/auth/me", api_base()));
}

#[test]
fn bearer_header_omitted_for_empty_token() {
    assert_eq!(bearer_header(""), None);
}

#[test]
fn bearer_header_formats_non_empty_token() {
    assert_eq!(bearer_header("abc"), Some("Bearer abc".to_owned()));
}

// =============================================================
// Body parsing
// =============================================================

#[test]
fn parse_body_empty_is_null() {
    assert_eq!(parse_body(""), serde_json::Value::Null);
}

#[test]
fn parse_body_valid_json_parses() {
    assert_eq!(parse_body("{\"ok\":true}"), serde_json::json!({ "ok": true }));
}

#[test]
fn parse_body_non_json_carries_raw_text() {
    assert_eq!(parse_body("plain text"), serde_json::Value::String("plain text".to_owned()));
}

#[test]
fn error_message_prefers_error_field() {
    let body = serde_json::json!({ "error": "bad token", "message": "ignored" });
    assert_eq!(error_message(&body), "bad token");
}

#[test]
fn error_message_falls_back_to_message_field() {
    let body = serde_json::json!({ "message": "boom" });
    assert_eq!(error_message(&body), "boom");
}

#[test]
fn error_message_generic_when_neither_field_present() {
    assert_eq!(error_message(&serde_json::json!({})), "Request failed");
    assert_eq!(error_message(&serde_json::Value::Null), "Request failed");
}

#[test]
fn is_success_covers_2xx_only() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(!is_success(199));
    assert!(!is_success(301));
    assert!(!is_success(404));
}

// =============================================================
// Missing-capability classification
// =============================================================

#[test]
fn missing_capability_on_404_and_501() {
    assert!(is_missing_capability(404, "anything"));
    assert!(is_missing_capability(501, ""));
}

#[test]
fn missing_capability_on_prose_markers_case_insensitive() {
    assert!(is_missing_capability(500, "Route Not Found"));
    assert!(is_missing_capability(400, "ENDPOINT MISSING"));
    assert!(is_missing_capability(500, "resource not found"));
}

#[test]
fn not_missing_on_ordinary_failures() {
    assert!(!is_missing_capability(500, "boom"));
    assert!(!is_missing_capability(401, "invalid token"));
}

// =============================================================
// PortalResult
// =============================================================

#[test]
fn portal_failure_404_route_not_found_is_missing() {
    let body = parse_body("{\"error\":\"route not found\"}");
    let err = RequestError { status: 404, message: error_message(&body) };
    let result: PortalResult<serde_json::Value> = PortalResult::failure(err);
    assert!(!result.ok);
    assert!(result.missing);
    assert_eq!(result.status, 404);
    assert!(result.data.is_none());
}

#[test]
fn portal_failure_500_boom_is_plain_error() {
    let body = parse_body("{\"message\":\"boom\"}");
    let err = RequestError { status: 500, message: error_message(&body) };
    let result: PortalResult<serde_json::Value> = PortalResult::failure(err);
    assert!(!result.ok);
    assert!(!result.missing);
    assert_eq!(result.status, 500);
    assert_eq!(result.error.as_ref().map(|e| e.message.as_str()), Some("boom"));
}

#[test]
fn portal_success_carries_status_and_data() {
    let result = PortalResult::success(200, serde_json::json!([1, 2]));
    assert!(result.ok);
    assert!(!result.missing);
    assert_eq!(result.status, 200);
    assert_eq!(result.data, Some(serde_json::json!([1, 2])));
    assert!(result.error.is_none());
}

#[test]
fn transport_error_uses_status_zero() {
    let err = RequestError::transport("network down");
    assert_eq!(err.status, 0);
    assert_eq!(err.to_string(), "network down");
}

#[test]
fn from_value_decodes_typed_payloads() {
    let decoded: Vec<u32> = from_value(serde_json::json!([1, 2, 3])).unwrap();
    assert_eq!(decoded, vec![1, 2, 3]);
    let failed: Result<Vec<u32>, RequestError> = from_value(serde_json::json!("nope"));
    assert!(failed.is_err());
}
