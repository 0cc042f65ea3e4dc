//! # MMS Core
//!
//! Core business logic for the MMS medical management system.
//!
//! This crate contains pure data operations and in-memory state:
//! - The hardcoded reference table of (condition, symptoms, medicines) records
//! - The symptom matcher: the one externally meaningful contract
//! - Symptom selection with toggle semantics
//! - The manual medical-report log (session-owned, never persisted)
//!
//! **No API concerns**: Authentication, HTTP servers, or service interfaces
//! belong in `api-rest` or `api-shared`.

pub mod dataset;
pub mod matcher;
pub mod reports;
pub mod selection;

mod error;

pub use dataset::{all_symptoms, reference_table, ReferenceRecord};
pub use error::{ReportError, ReportResult};
pub use matcher::predict_medicines;
pub use reports::{Report, ReportDraft, ReportFile, ReportLog};
pub use selection::SelectionSet;
