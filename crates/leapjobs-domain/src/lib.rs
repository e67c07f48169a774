//! Leapjobs Domain Layer
//!
//! Core domain model for the job record service. This crate defines the
//! `Job` aggregate and its invariants, the pagination contract, domain
//! errors, and the repository interface that infrastructure crates
//! implement. The domain layer defines only interfaces (traits) for
//! persistence, no concrete implementations.

pub mod errors;
pub mod job;
pub mod pagination;
pub mod repositories;
pub mod value_objects;

// Re-export commonly used types
pub use errors::{DomainError, DomainResult};
pub use job::Job;
pub use pagination::{Page, PageRequest, SortOrder};
pub use repositories::JobRepository;
pub use value_objects::JobId;
