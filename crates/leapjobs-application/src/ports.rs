//! Ports the application layer expects infrastructure to provide
//!
//! The `UnitOfWork` port is the explicit transaction boundary: every
//! mutating service operation runs its gateway calls inside
//! `execute`, which commits on success and rolls back on error. No
//! partial effects are observable outside the boundary.

use std::future::Future;

use async_trait::async_trait;

use crate::errors::ApplicationResult;

/// Scoped transaction boundary
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Run `work` within one transaction
    ///
    /// Implementations open the transaction before polling the future,
    /// commit when it resolves to `Ok`, and roll back when it resolves
    /// to `Err` - on every exit path.
    async fn execute<T, F>(&self, work: F) -> ApplicationResult<T>
    where
        T: Send + 'static,
        F: Future<Output = ApplicationResult<T>> + Send + 'static;
}

/// Pass-through unit of work
///
/// For stores whose operations are individually atomic (the in-memory
/// backend) and for tests. Each service operation is a single gateway
/// round trip, so the pass-through still yields all-or-nothing
/// behavior.
pub struct NoOpUnitOfWork;

#[async_trait]
impl UnitOfWork for NoOpUnitOfWork {
    async fn execute<T, F>(&self, work: F) -> ApplicationResult<T>
    where
        T: Send + 'static,
        F: Future<Output = ApplicationResult<T>> + Send + 'static,
    {
        work.await
    }
}
