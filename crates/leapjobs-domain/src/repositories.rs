//! Repository interface for job persistence
//!
//! The domain layer defines the contract for data access; infrastructure
//! crates provide the implementations. Every operation is atomic with
//! respect to the others: contention is handled inside the store, never
//! by callers.

use async_trait::async_trait;

use crate::errors::DomainResult;
use crate::job::Job;
use crate::pagination::{Page, PageRequest};
use crate::value_objects::JobId;

/// Repository for job records
///
/// Read operations signal absence with `Ok(None)`, never an error.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Persist a job
    ///
    /// Inserts when the job carries no identity, assigning the next
    /// sequence id; upserts when identity is set. Returns the persisted
    /// record carrying its identity.
    async fn save(&self, job: &Job) -> DomainResult<Job>;

    /// Find a job by id
    async fn find_by_id(&self, id: JobId) -> DomainResult<Option<Job>>;

    /// List jobs in the requested sort order, one page at a time
    ///
    /// The total count in the returned page is computed over the full
    /// record set at call time.
    async fn find_all(&self, request: &PageRequest) -> DomainResult<Page<Job>>;

    /// Delete a job by id; deleting an absent id is a no-op
    async fn delete_by_id(&self, id: JobId) -> DomainResult<()>;

    /// Check if a job exists
    async fn exists(&self, id: JobId) -> DomainResult<bool>;

    /// Total number of stored jobs
    async fn count(&self) -> DomainResult<u64>;
}
