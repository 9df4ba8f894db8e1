use thiserror::Error;

/// Field-tagged failure produced by the write-time validators.
///
/// The same validator runs whether a record arrives through an admin form,
/// a batch job, or a programmatic call, so the error carries the offending
/// field name rather than a source-specific message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Database(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DomainError::NotFound("row not found".to_string()),
            sqlx::Error::Database(db_err) => {
                let message = db_err.message().to_string();
                // Unique-index violations are an expected outcome for the
                // (professional, branch, weekday) triple; keep them separate
                // from genuine store failures.
                if message.contains("UNIQUE") || message.contains("unique") {
                    DomainError::Conflict(message)
                } else {
                    DomainError::Database(message)
                }
            }
            other => DomainError::Database(other.to_string()),
        }
    }
}
