#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("report date must be an ISO-8601 calendar date (YYYY-MM-DD): {0}")]
    InvalidDate(chrono::ParseError),
    #[error("a report file is required")]
    MissingFile,
    #[error("no report found with id {0}")]
    NotFound(uuid::Uuid),
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;
