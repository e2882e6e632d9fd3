//! Shared wire DTOs for the console/backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON convention so serde
//! round-trips stay lossless. Role and status sets are closed enums rather
//! than strings, which keeps route policy and rendering exhaustively
//! checkable.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Access role assigned to an account by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Program administrator with full console access.
    #[serde(rename = "ADMIN")]
    Admin,
    /// Data protection officer; reviews DPIAs and sees admin screens.
    #[serde(rename = "DPO")]
    Dpo,
    /// End user; sees only the self-service case portal.
    #[serde(rename = "USER")]
    User,
}

impl Role {
    /// Default landing path for a role, used when steering a user away from
    /// a route their role cannot access.
    pub fn home_path(self) -> &'static str {
        match self {
            Role::Admin => "/admin",
            Role::Dpo => "/dpo",
            Role::User => "/user",
        }
    }
}

/// Whether an account can currently sign in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "INACTIVE")]
    Inactive,
}

impl AccountStatus {
    pub fn label(self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
        }
    }
}

/// An account as returned by the backend. The console holds a read-only
/// projection; the backend owns the record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque identifier minted by the backend.
    pub id: String,
    /// Display name.
    pub full_name: String,
    /// Sign-in email address.
    pub email: String,
    /// Access role; drives route policy.
    pub role: Role,
    /// Whether the account can sign in.
    pub status: AccountStatus,
    /// Open-ended per-tenant fields; carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
}

/// Response body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Opaque bearer credential for subsequent requests.
    pub token: String,
    /// The authenticated account.
    pub user: User,
    /// Server-suggested landing path, if any.
    #[serde(default)]
    pub redirect_to: Option<String>,
}

/// Response body of `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MeResponse {
    pub user: User,
}

/// Review status of a single assessment requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplianceStatus {
    #[serde(rename = "COMPLIANT")]
    Compliant,
    #[serde(rename = "PARTIAL")]
    Partial,
    #[serde(rename = "MISSING")]
    Missing,
    #[serde(rename = "NOT_ASSESSED")]
    NotAssessed,
}

impl ComplianceStatus {
    pub fn label(self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::Partial => "Partial",
            ComplianceStatus::Missing => "Missing",
            ComplianceStatus::NotAssessed => "Not assessed",
        }
    }

    /// All statuses in the order the status picker offers them.
    pub fn all() -> [ComplianceStatus; 4] {
        [
            ComplianceStatus::Compliant,
            ComplianceStatus::Partial,
            ComplianceStatus::Missing,
            ComplianceStatus::NotAssessed,
        ]
    }

    /// Wire name used in PATCH payloads and option values.
    pub fn wire_name(self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "COMPLIANT",
            ComplianceStatus::Partial => "PARTIAL",
            ComplianceStatus::Missing => "MISSING",
            ComplianceStatus::NotAssessed => "NOT_ASSESSED",
        }
    }

    /// Parse a wire name back into a status; unknown names read as absent.
    pub fn from_wire(value: &str) -> Option<ComplianceStatus> {
        ComplianceStatus::all()
            .into_iter()
            .find(|status| status.wire_name() == value)
    }
}

/// A single control requirement inside an assessment domain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    /// Opaque identifier minted by the backend.
    pub id: String,
    /// Control text shown to the assessor.
    pub control: String,
    /// Current review status.
    pub status: ComplianceStatus,
    /// Assessor notes, if any.
    #[serde(default)]
    pub notes: Option<String>,
}

/// A thematic group of requirements (e.g. "Consent", "Data retention").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentDomain {
    pub id: String,
    pub name: String,
    pub requirements: Vec<Requirement>,
}

/// A gap assessment: domains of requirements reviewed against the law.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapAssessment {
    pub id: String,
    pub title: String,
    pub domains: Vec<AssessmentDomain>,
    /// ISO 8601 timestamp of the last change, if the backend reports one.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Lifecycle of a DPIA record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DpiaStatus {
    #[serde(rename = "DRAFT")]
    Draft,
    #[serde(rename = "SUBMITTED")]
    Submitted,
    #[serde(rename = "IN_REVIEW")]
    InReview,
    #[serde(rename = "APPROVED")]
    Approved,
    #[serde(rename = "REJECTED")]
    Rejected,
}

impl DpiaStatus {
    pub fn label(self) -> &'static str {
        match self {
            DpiaStatus::Draft => "Draft",
            DpiaStatus::Submitted => "Submitted",
            DpiaStatus::InReview => "In review",
            DpiaStatus::Approved => "Approved",
            DpiaStatus::Rejected => "Rejected",
        }
    }

    /// Whether the record sits in the DPO review queue.
    pub fn awaiting_review(self) -> bool {
        matches!(self, DpiaStatus::Submitted | DpiaStatus::InReview)
    }
}

/// A data privacy impact assessment record as listed by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DpiaRecord {
    pub id: String,
    pub project_name: String,
    pub status: DpiaStatus,
    /// Overall risk score 1..=25 (likelihood x impact) computed at submission.
    pub risk_score: u8,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

/// Category of a privacy case filed through the portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseCategory {
    #[serde(rename = "ACCESS")]
    Access,
    #[serde(rename = "ERASURE")]
    Erasure,
    #[serde(rename = "CORRECTION")]
    Correction,
    #[serde(rename = "PORTABILITY")]
    Portability,
    #[serde(rename = "COMPLAINT")]
    Complaint,
    #[serde(rename = "OTHER")]
    Other,
}

impl CaseCategory {
    pub fn label(self) -> &'static str {
        match self {
            CaseCategory::Access => "Access request",
            CaseCategory::Erasure => "Erasure request",
            CaseCategory::Correction => "Correction request",
            CaseCategory::Portability => "Data portability",
            CaseCategory::Complaint => "Complaint",
            CaseCategory::Other => "Other",
        }
    }

    /// All categories in the order the filing form offers them.
    pub fn all() -> [CaseCategory; 6] {
        [
            CaseCategory::Access,
            CaseCategory::Erasure,
            CaseCategory::Correction,
            CaseCategory::Portability,
            CaseCategory::Complaint,
            CaseCategory::Other,
        ]
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            CaseCategory::Access => "ACCESS",
            CaseCategory::Erasure => "ERASURE",
            CaseCategory::Correction => "CORRECTION",
            CaseCategory::Portability => "PORTABILITY",
            CaseCategory::Complaint => "COMPLAINT",
            CaseCategory::Other => "OTHER",
        }
    }

    pub fn from_wire(value: &str) -> Option<CaseCategory> {
        CaseCategory::all()
            .into_iter()
            .find(|category| category.wire_name() == value)
    }
}

/// Handling status of a privacy case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    #[serde(rename = "OPEN")]
    Open,
    #[serde(rename = "IN_REVIEW")]
    InReview,
    #[serde(rename = "RESOLVED")]
    Resolved,
    #[serde(rename = "REJECTED")]
    Rejected,
}

impl CaseStatus {
    pub fn label(self) -> &'static str {
        match self {
            CaseStatus::Open => "Open",
            CaseStatus::InReview => "In review",
            CaseStatus::Resolved => "Resolved",
            CaseStatus::Rejected => "Rejected",
        }
    }
}

/// A dated handling note on a privacy case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseUpdate {
    /// ISO 8601 timestamp of the note.
    pub at: String,
    pub note: String,
    #[serde(default)]
    pub author: Option<String>,
}

/// A privacy case as seen by the filing user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyCase {
    pub id: String,
    pub subject: String,
    pub category: CaseCategory,
    pub description: String,
    pub status: CaseStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Handling timeline, newest last; present on the detail endpoint.
    #[serde(default)]
    pub updates: Vec<CaseUpdate>,
}

/// One cell of the 5x5 likelihood x impact risk grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskCell {
    /// Likelihood 1..=5.
    pub likelihood: u8,
    /// Impact 1..=5.
    pub impact: u8,
    /// Number of identified risks in this cell.
    pub count: u32,
}

/// Aggregated compliance numbers for the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub compliant: u32,
    pub partial: u32,
    pub missing: u32,
    pub not_assessed: u32,
    pub open_cases: u32,
    pub dpia_in_review: u32,
    /// Populated cells of the risk heatmap; absent cells count zero.
    #[serde(default)]
    pub risk_cells: Vec<RiskCell>,
}
