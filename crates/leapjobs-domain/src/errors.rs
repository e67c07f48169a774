//! Domain errors for Leapjobs

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid job title: {reason}")]
    InvalidJobTitle { reason: String },

    #[error("Invalid salary range: {reason}")]
    InvalidSalaryRange { reason: String },

    #[error("Invalid page request: {reason}")]
    InvalidPageRequest { reason: String },

    #[error("Store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    #[error("Concurrency conflict: {resource}")]
    ConcurrencyConflict { resource: String },
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
