//! Application layer error types
//!
//! These errors represent application-level failures that are suitable
//! for API/UI consumption. They wrap domain errors with additional
//! context. Absence of a record is never an error at this layer: read
//! and partial-update paths signal it with `Ok(None)`.

use thiserror::Error;

use leapjobs_domain::errors::DomainError;

/// Application layer result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application layer errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    /// Input validation failed
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Required field missing
    #[error("Required field missing: {0}")]
    RequiredFieldMissing(String),

    /// Repository operation failed; store errors propagate unchanged
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// Transaction failed
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidJobTitle { reason } => {
                ApplicationError::ValidationFailed(format!("Invalid job title: {}", reason))
            }
            DomainError::InvalidSalaryRange { reason } => {
                ApplicationError::ValidationFailed(format!("Invalid salary range: {}", reason))
            }
            DomainError::InvalidPageRequest { reason } => {
                ApplicationError::ValidationFailed(format!("Invalid page request: {}", reason))
            }
            DomainError::StoreUnavailable { .. } | DomainError::ConcurrencyConflict { .. } => {
                ApplicationError::RepositoryError(err.to_string())
            }
        }
    }
}
