//! The manual medical-report log.
//!
//! Reports live in process memory only. The log reflects the latest caller
//! actions and is owned and mutated exclusively by the single interactive
//! session that created it; nothing is written to disk and nothing survives
//! process exit.

use crate::{ReportError, ReportResult};
use chrono::NaiveDate;
use mms_files::{FileContent, LoadedFile};
use mms_types::NonEmptyText;
use uuid::Uuid;

/// The uploaded file attached to a report, already read into memory.
///
/// Reports never reference the filesystem: the content a viewer displays is
/// captured here at submission time.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReportFile {
    /// Original filename shown in the report listing
    pub filename: NonEmptyText,
    /// Displayable content (text or data URL)
    pub content: FileContent,
}

impl From<LoadedFile> for ReportFile {
    fn from(loaded: LoadedFile) -> Self {
        Self {
            filename: loaded.metadata.original_filename,
            content: loaded.content,
        }
    }
}

/// A submitted medical report.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Report {
    /// Server-assigned identifier
    pub id: Uuid,
    /// Date the report refers to
    pub date: NaiveDate,
    /// Condition the report concerns
    pub condition: NonEmptyText,
    pub doctor_name: NonEmptyText,
    pub hospital_name: NonEmptyText,
    /// The uploaded report file
    pub file: ReportFile,
}

/// Caller-supplied fields for a new report, unvalidated.
///
/// A draft becomes a [`Report`] only through [`ReportLog::add`], which
/// enforces the submission guard: every text field non-empty, a parseable
/// date, and a file present.
#[derive(Debug, Clone, Default)]
pub struct ReportDraft {
    pub date: String,
    pub condition: String,
    pub doctor_name: String,
    pub hospital_name: String,
    pub file: Option<ReportFile>,
}

/// In-memory store of submitted reports.
///
/// Insertion order is preserved; listing returns reports oldest-first as
/// submitted.
#[derive(Debug, Default)]
pub struct ReportLog {
    reports: Vec<Report>,
}

impl ReportLog {
    /// Creates an empty report log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a draft and appends it as a new report.
    ///
    /// # Arguments
    ///
    /// * `draft` - The unvalidated report fields
    ///
    /// # Returns
    ///
    /// The stored report, including its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a `ReportError` if:
    /// - any of condition, doctor name, or hospital name is empty after
    ///   trimming,
    /// - the date is not a valid `YYYY-MM-DD` calendar date, or
    /// - no file is attached.
    pub fn add(&mut self, draft: ReportDraft) -> ReportResult<Report> {
        let date = draft
            .date
            .trim()
            .parse::<NaiveDate>()
            .map_err(ReportError::InvalidDate)?;
        let condition = required_text("condition", &draft.condition)?;
        let doctor_name = required_text("doctor_name", &draft.doctor_name)?;
        let hospital_name = required_text("hospital_name", &draft.hospital_name)?;
        let file = draft.file.ok_or(ReportError::MissingFile)?;

        let report = Report {
            id: Uuid::new_v4(),
            date,
            condition,
            doctor_name,
            hospital_name,
            file,
        };
        tracing::debug!(id = %report.id, "report added");
        self.reports.push(report.clone());

        Ok(report)
    }

    /// Lists all reports in submission order.
    pub fn list(&self) -> &[Report] {
        &self.reports
    }

    /// Looks up a report by id.
    pub fn get(&self, id: Uuid) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    /// Removes a report by id.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NotFound` when no report has the given id.
    pub fn delete(&mut self, id: Uuid) -> ReportResult<()> {
        let position = self
            .reports
            .iter()
            .position(|r| r.id == id)
            .ok_or(ReportError::NotFound(id))?;
        self.reports.remove(position);
        tracing::debug!(%id, "report deleted");
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }
}

fn required_text(field: &str, value: &str) -> ReportResult<NonEmptyText> {
    NonEmptyText::new(value)
        .map_err(|_| ReportError::InvalidInput(format!("{field} cannot be empty")))
}
