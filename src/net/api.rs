//! Typed calls for each backend endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin layer over `net::http`: one function per endpoint, decoding into the
//! DTOs in `net::types`. Admin screens use the strict `Result` calls; the
//! portal functions return the non-raising `PortalResult` so consumer pages
//! can distinguish "failed" from "not connected yet".

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::json;

use super::http::{self, PortalResult, RequestError, from_value};
use super::types::{
    CaseCategory, ComplianceStatus, DashboardSummary, DpiaRecord, DpiaStatus, GapAssessment,
    LoginResponse, MeResponse, PrivacyCase, Role, User,
};

fn requirement_endpoint(assessment_id: &str, requirement_id: &str) -> String {
    format!("/assessments/{assessment_id}/requirements/{requirement_id}")
}

fn dpia_endpoint(dpia_id: &str) -> String {
    format!("/dpia/{dpia_id}")
}

fn user_endpoint(user_id: &str) -> String {
    format!("/users/{user_id}")
}

fn case_endpoint(case_id: &str) -> String {
    format!("/cases/{case_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn case_attachments_endpoint(case_id: &str) -> String {
    format!("/cases/{case_id}/attachments")
}

/// Exchange credentials for a session via `POST /auth/login`.
///
/// # Errors
///
/// Fails with the backend's message on bad credentials or transport failure.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, RequestError> {
    let payload = json!({ "email": email, "password": password });
    from_value(http::post_json("/auth/login", &payload).await?)
}

/// Validate the stored token and fetch its account via `GET /auth/me`.
///
/// # Errors
///
/// Any failure here means the session is no longer usable.
pub async fn fetch_current_user() -> Result<User, RequestError> {
    let response: MeResponse = from_value(http::get_json("/auth/me").await?)?;
    Ok(response.user)
}

/// Fetch aggregated dashboard numbers via `GET /dashboard/summary`.
///
/// # Errors
///
/// Fails with the normalized request error.
pub async fn fetch_dashboard_summary() -> Result<DashboardSummary, RequestError> {
    from_value(http::get_json("/dashboard/summary").await?)
}

/// List gap assessments via `GET /assessments`.
///
/// # Errors
///
/// Fails with the normalized request error.
pub async fn fetch_assessments() -> Result<Vec<GapAssessment>, RequestError> {
    from_value(http::get_json("/assessments").await?)
}

/// Create a gap assessment via `POST /assessments`.
///
/// # Errors
///
/// Fails with the normalized request error.
pub async fn create_assessment(title: &str) -> Result<GapAssessment, RequestError> {
    let payload = json!({ "title": title });
    from_value(http::post_json("/assessments", &payload).await?)
}

/// Update one requirement's status and notes via
/// `PATCH /assessments/{aid}/requirements/{rid}`.
///
/// # Errors
///
/// Fails with the normalized request error.
pub async fn update_requirement(
    assessment_id: &str,
    requirement_id: &str,
    status: ComplianceStatus,
    notes: Option<&str>,
) -> Result<(), RequestError> {
    let payload = json!({ "status": status.wire_name(), "notes": notes });
    http::patch_json(&requirement_endpoint(assessment_id, requirement_id), &payload).await?;
    Ok(())
}

/// List DPIA records via `GET /dpia`.
///
/// # Errors
///
/// Fails with the normalized request error.
pub async fn fetch_dpias() -> Result<Vec<DpiaRecord>, RequestError> {
    from_value(http::get_json("/dpia").await?)
}

/// Submit a completed DPIA wizard draft via `POST /dpia`.
///
/// # Errors
///
/// Fails with the normalized request error.
pub async fn submit_dpia(submission: &serde_json::Value) -> Result<DpiaRecord, RequestError> {
    from_value(http::post_json("/dpia", submission).await?)
}

/// Record a DPO review decision via `PATCH /dpia/{id}`.
///
/// # Errors
///
/// Fails with the normalized request error.
pub async fn review_dpia(dpia_id: &str, decision: DpiaStatus) -> Result<(), RequestError> {
    let payload = json!({ "status": decision });
    http::patch_json(&dpia_endpoint(dpia_id), &payload).await?;
    Ok(())
}

/// List console accounts via `GET /users`.
///
/// # Errors
///
/// Fails with the normalized request error.
pub async fn fetch_users() -> Result<Vec<User>, RequestError> {
    from_value(http::get_json("/users").await?)
}

/// Create an account via `POST /users`.
///
/// # Errors
///
/// Fails with the normalized request error.
pub async fn create_user(full_name: &str, email: &str, role: Role) -> Result<User, RequestError> {
    let payload = json!({ "fullName": full_name, "email": email, "role": role });
    from_value(http::post_json("/users", &payload).await?)
}

/// Patch an account's role or status via `PATCH /users/{id}`.
///
/// # Errors
///
/// Fails with the normalized request error.
pub async fn update_user(user_id: &str, patch: &serde_json::Value) -> Result<User, RequestError> {
    from_value(http::patch_json(&user_endpoint(user_id), patch).await?)
}

/// List the signed-in user's privacy cases via `GET /cases`.
pub async fn portal_fetch_cases() -> PortalResult<Vec<PrivacyCase>> {
    http::portal_get("/cases").await
}

/// File a new privacy case via `POST /cases`.
pub async fn portal_file_case(
    subject: &str,
    category: CaseCategory,
    description: &str,
) -> PortalResult<PrivacyCase> {
    let payload = json!({
        "subject": subject,
        "category": category.wire_name(),
        "description": description,
    });
    http::portal_post("/cases", &payload).await
}

/// Fetch one case with its handling timeline via `GET /cases/{id}`.
pub async fn portal_fetch_case(case_id: &str) -> PortalResult<PrivacyCase> {
    http::portal_get(&case_endpoint(case_id)).await
}

/// Upload evidence for a case as multipart form data via
/// `POST /cases/{id}/attachments`.
#[cfg(feature = "hydrate")]
pub async fn portal_upload_evidence(
    case_id: &str,
    form: &web_sys::FormData,
) -> PortalResult<serde_json::Value> {
    http::portal_upload(&case_attachments_endpoint(case_id), form).await
}
