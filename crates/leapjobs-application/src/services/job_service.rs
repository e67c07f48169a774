//! Job Application Service
//!
//! Orchestrates the job record use cases: full and partial updates,
//! paged listing, point lookup, and deletion. Stateless and reusable
//! across requests; all mutable state is persisted via the repository.
//! Every mutating operation runs its gateway calls inside one
//! `UnitOfWork` boundary; read-only operations skip the boundary so
//! the store can serve them without write locks.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use leapjobs_domain::pagination::{Page, PageRequest};
use leapjobs_domain::repositories::JobRepository;
use leapjobs_domain::value_objects::JobId;

use crate::dto::JobDto;
use crate::errors::{ApplicationError, ApplicationResult};
use crate::events::{ApplicationEvent, EventPublisher};
use crate::mapper::JobMapper;
use crate::ports::UnitOfWork;

/// Job Application Service
pub struct JobService<R, U, E>
where
    R: JobRepository + Send + Sync,
    U: UnitOfWork + Send + Sync,
    E: EventPublisher + Send + Sync,
{
    repository: Arc<R>,
    uow: Arc<U>,
    events: Arc<E>,
}

impl<R, U, E> JobService<R, U, E>
where
    R: JobRepository + Send + Sync + 'static,
    U: UnitOfWork + Send + Sync,
    E: EventPublisher + Send + Sync,
{
    /// Create a new JobService with injected dependencies
    pub fn new(repository: Arc<R>, uow: Arc<U>, events: Arc<E>) -> Self {
        Self {
            repository,
            uow,
            events,
        }
    }

    /// Create a job
    ///
    /// The returned DTO carries the identity assigned by the store.
    pub async fn create(&self, dto: JobDto) -> ApplicationResult<JobDto> {
        debug!("Request to create job: {:?}", dto);

        let job = JobMapper::to_entity(&dto)?;

        let repo = Arc::clone(&self.repository);
        let saved = self
            .uow
            .execute(async move { repo.save(&job).await.map_err(ApplicationError::from) })
            .await?;

        if let Some(id) = saved.id() {
            self.events
                .publish(ApplicationEvent::JobCreated {
                    job_id: id.value(),
                    timestamp: Utc::now(),
                })
                .await;
        }

        Ok(JobMapper::to_dto(&saved))
    }

    /// Replace a job wholesale
    ///
    /// Requires the DTO to carry its identity. Persists with the
    /// store's upsert policy and returns the updated DTO.
    pub async fn update(&self, dto: JobDto) -> ApplicationResult<JobDto> {
        debug!("Request to update job: {:?}", dto);

        if dto.id.is_none() {
            return Err(ApplicationError::RequiredFieldMissing("id".into()));
        }
        let job = JobMapper::to_entity(&dto)?;

        let repo = Arc::clone(&self.repository);
        let saved = self
            .uow
            .execute(async move { repo.save(&job).await.map_err(ApplicationError::from) })
            .await?;

        if let Some(id) = saved.id() {
            self.events
                .publish(ApplicationEvent::JobUpdated {
                    job_id: id.value(),
                    timestamp: Utc::now(),
                })
                .await;
        }

        Ok(JobMapper::to_dto(&saved))
    }

    /// Partially update a job
    ///
    /// Requires the DTO to carry its identity. Returns `Ok(None)` when
    /// no record matches - absence is a normal result, not an error.
    /// Present DTO fields are applied onto the existing record; absent
    /// fields leave it untouched. The lookup and the save share one
    /// transaction boundary.
    pub async fn partial_update(&self, dto: JobDto) -> ApplicationResult<Option<JobDto>> {
        debug!("Request to partially update job: {:?}", dto);

        let raw_id = dto
            .id
            .ok_or_else(|| ApplicationError::RequiredFieldMissing("id".into()))?;
        let id = JobId::new(raw_id);

        let repo = Arc::clone(&self.repository);
        let patch = dto.clone();
        let saved = self
            .uow
            .execute(async move {
                let existing = repo.find_by_id(id).await.map_err(ApplicationError::from)?;
                match existing {
                    Some(mut job) => {
                        JobMapper::partial_update(&mut job, &patch)?;
                        let saved = repo.save(&job).await.map_err(ApplicationError::from)?;
                        Ok(Some(saved))
                    }
                    None => Ok(None),
                }
            })
            .await?;

        match saved {
            Some(job) => {
                self.events
                    .publish(ApplicationEvent::JobUpdated {
                        job_id: raw_id,
                        timestamp: Utc::now(),
                    })
                    .await;
                Ok(Some(JobMapper::to_dto(&job)))
            }
            None => Ok(None),
        }
    }

    /// List jobs one page at a time
    ///
    /// Read-only: runs outside the unit of work. Page metadata is
    /// preserved through the DTO mapping.
    pub async fn find_all(&self, request: PageRequest) -> ApplicationResult<Page<JobDto>> {
        debug!("Request to list jobs");

        let page = self
            .repository
            .find_all(&request)
            .await
            .map_err(ApplicationError::from)?;

        Ok(page.map(|job| JobMapper::to_dto(&job)))
    }

    /// Get one job by id
    ///
    /// Read-only; absence is a normal result.
    pub async fn find_one(&self, id: u64) -> ApplicationResult<Option<JobDto>> {
        debug!("Request to get job: {}", id);

        let job = self
            .repository
            .find_by_id(JobId::new(id))
            .await
            .map_err(ApplicationError::from)?;

        Ok(job.map(|job| JobMapper::to_dto(&job)))
    }

    /// Delete a job by id
    ///
    /// Idempotent: deleting an absent id is a no-op, never an error.
    pub async fn delete(&self, id: u64) -> ApplicationResult<()> {
        debug!("Request to delete job: {}", id);

        let repo = Arc::clone(&self.repository);
        let job_id = JobId::new(id);
        self.uow
            .execute(async move {
                repo.delete_by_id(job_id)
                    .await
                    .map_err(ApplicationError::from)
            })
            .await?;

        self.events
            .publish(ApplicationEvent::JobDeleted {
                job_id: id,
                timestamp: Utc::now(),
            })
            .await;

        Ok(())
    }
}
