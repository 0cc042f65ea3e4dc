//! Request and response types for the MMS REST API.
//!
//! These are the wire shapes only. Handlers map them to and from the core
//! domain types; nothing here enforces validation beyond structure.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Login request carrying the shared password
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginReq {
    pub password: String,
}

/// Successful login response carrying the session token
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRes {
    pub token: String,
}

/// Logout response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogoutRes {
    pub success: bool,
}

/// The selectable symptom labels
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SymptomsRes {
    pub symptoms: Vec<String>,
}

/// Medicine prediction request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PredictReq {
    /// Selected symptom labels; order is irrelevant, duplicates are ignored
    pub symptoms: Vec<String>,
}

/// Medicine prediction response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PredictRes {
    /// Predicted medicines in stable order; empty when nothing matches
    pub medicines: Vec<String>,
}

/// Shape of a report file's display content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FileContentKind {
    /// Inline UTF-8 text
    Text,
    /// `data:` URL for an embedded viewer
    DataUrl,
}

/// A report file as submitted or served for viewing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportFileDto {
    pub filename: String,
    pub kind: FileContentKind,
    pub content: String,
}

/// Report creation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReportReq {
    /// ISO-8601 calendar date (YYYY-MM-DD)
    pub date: String,
    pub condition: String,
    pub doctor_name: String,
    pub hospital_name: String,
    /// The uploaded file, already read into displayable content
    pub file: ReportFileDto,
}

/// A report as presented in listings (file content omitted)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportRes {
    pub id: String,
    pub date: String,
    pub condition: String,
    pub doctor_name: String,
    pub hospital_name: String,
    pub filename: String,
}

/// Report creation response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReportRes {
    pub report: ReportRes,
}

/// Report listing response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListReportsRes {
    pub reports: Vec<ReportRes>,
}

/// Report file viewing response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportFileRes {
    pub filename: String,
    pub kind: FileContentKind,
    pub content: String,
}

/// Report deletion response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteReportRes {
    pub success: bool,
}
