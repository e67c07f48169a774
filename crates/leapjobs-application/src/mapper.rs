//! Bidirectional converter between the Job aggregate and its DTO
//!
//! Pure data transformation: no I/O, no side effects beyond mutating
//! the partial-update target.

use leapjobs_domain::job::Job;
use leapjobs_domain::value_objects::JobId;

use crate::dto::JobDto;
use crate::errors::{ApplicationError, ApplicationResult};

/// Field-level mapper for `Job` and `JobDto`
pub struct JobMapper;

impl JobMapper {
    /// Build an entity from a DTO
    ///
    /// Identity is copied when present, otherwise left unset for the
    /// persistence gateway to assign. The title is the one required
    /// field; invariant validation is the aggregate's.
    pub fn to_entity(dto: &JobDto) -> ApplicationResult<Job> {
        let title = dto
            .title
            .as_ref()
            .ok_or_else(|| ApplicationError::RequiredFieldMissing("title".into()))?;

        let mut job = Job::create(title.clone(), dto.min_salary, dto.max_salary)?;
        if let Some(raw) = dto.id {
            job.assign_id(JobId::new(raw));
        }
        Ok(job)
    }

    /// Build a DTO mirroring every field of the entity
    pub fn to_dto(job: &Job) -> JobDto {
        JobDto::from_domain(job)
    }

    /// Apply the DTO's present fields onto an existing entity
    ///
    /// Fields absent on the DTO leave the target untouched; the
    /// target's identity is never modified. A present-but-optional
    /// entity field cannot be cleared back to null this way - `None`
    /// uniformly means "absent".
    pub fn partial_update(target: &mut Job, dto: &JobDto) -> ApplicationResult<()> {
        if let Some(title) = &dto.title {
            target.set_title(title.clone())?;
        }
        if let Some(min_salary) = dto.min_salary {
            target.set_min_salary(min_salary)?;
        }
        if let Some(max_salary) = dto.max_salary {
            target.set_max_salary(max_salary)?;
        }
        Ok(())
    }
}
