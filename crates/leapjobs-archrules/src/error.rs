//! Error types for the layering audit

use thiserror::Error;

/// Result type for layering audit operations
pub type ArchRuleResult<T> = Result<T, ArchRuleError>;

/// Errors that can occur while auditing the workspace
#[derive(Debug, Error)]
pub enum ArchRuleError {
    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The audited path is not a workspace root
    #[error("Invalid workspace root: {0}")]
    InvalidWorkspace(String),
}
