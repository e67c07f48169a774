//! Job Aggregate Root
//!
//! A `Job` is one persisted job posting: a required title plus an
//! optional salary band. Identity is assigned by the persistence
//! gateway on first insert and is immutable afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::JobId;

/// Maximum allowed length of a job title, in characters
pub const MAX_TITLE_LEN: usize = 100;

/// Job Aggregate Root
///
/// Encapsulates the job record's invariants. Fields are private; all
/// mutation goes through validated setters that refresh `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Identity; `None` until the record is first persisted
    id: Option<JobId>,

    /// Job title (non-empty, max 100 chars)
    title: String,

    /// Lower salary bound, if advertised
    min_salary: Option<i64>,

    /// Upper salary bound, if advertised
    max_salary: Option<i64>,

    /// Creation timestamp (immutable)
    created_at: DateTime<Utc>,

    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Job {
    /// Create a new, not-yet-persisted job with invariant validation
    ///
    /// # Invariants
    /// - Title: 1-100 chars
    /// - `min_salary <= max_salary` when both bounds are present
    ///
    /// # Errors
    /// Returns `DomainError` if invariants are violated
    pub fn create(
        title: String,
        min_salary: Option<i64>,
        max_salary: Option<i64>,
    ) -> DomainResult<Self> {
        Self::validate_title(&title)?;
        Self::validate_salary_range(min_salary, max_salary)?;

        let now = Utc::now();
        Ok(Self {
            id: None,
            title,
            min_salary,
            max_salary,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a persisted job from stored state
    ///
    /// Skips creation-time validation: the stored record already passed
    /// it. Used by persistence gateways when loading records.
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: JobId,
        title: String,
        min_salary: Option<i64>,
        max_salary: Option<i64>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            title,
            min_salary,
            max_salary,
            created_at,
            updated_at,
        }
    }

    /// Assign identity on first insert
    ///
    /// Called by persistence gateways only. Identity is immutable once
    /// set; assigning twice is a programming error.
    pub fn assign_id(&mut self, id: JobId) {
        debug_assert!(self.id.is_none(), "job identity is immutable once assigned");
        self.id = Some(id);
    }

    /// Replace the title
    pub fn set_title(&mut self, title: String) -> DomainResult<()> {
        Self::validate_title(&title)?;
        self.title = title;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Replace the lower salary bound
    pub fn set_min_salary(&mut self, min_salary: i64) -> DomainResult<()> {
        Self::validate_salary_range(Some(min_salary), self.max_salary)?;
        self.min_salary = Some(min_salary);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Replace the upper salary bound
    pub fn set_max_salary(&mut self, max_salary: i64) -> DomainResult<()> {
        Self::validate_salary_range(self.min_salary, Some(max_salary))?;
        self.max_salary = Some(max_salary);
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn id(&self) -> Option<JobId> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn min_salary(&self) -> Option<i64> {
        self.min_salary
    }

    pub fn max_salary(&self) -> Option<i64> {
        self.max_salary
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn validate_title(title: &str) -> DomainResult<()> {
        if title.trim().is_empty() {
            return Err(DomainError::InvalidJobTitle {
                reason: "title cannot be empty".into(),
            });
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(DomainError::InvalidJobTitle {
                reason: format!("title cannot exceed {} characters", MAX_TITLE_LEN),
            });
        }
        Ok(())
    }

    fn validate_salary_range(min: Option<i64>, max: Option<i64>) -> DomainResult<()> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(DomainError::InvalidSalaryRange {
                    reason: format!("min_salary {} exceeds max_salary {}", min, max),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_valid_job() {
        let job = Job::create("Engineer".into(), Some(50_000), Some(90_000)).unwrap();
        assert!(job.id().is_none());
        assert_eq!(job.title(), "Engineer");
        assert_eq!(job.min_salary(), Some(50_000));
        assert_eq!(job.max_salary(), Some(90_000));
        assert_eq!(job.created_at(), job.updated_at());
    }

    #[test]
    fn test_create_rejects_empty_title() {
        let result = Job::create("   ".into(), None, None);
        assert!(matches!(result, Err(DomainError::InvalidJobTitle { .. })));
    }

    #[test]
    fn test_create_rejects_overlong_title() {
        let result = Job::create("x".repeat(MAX_TITLE_LEN + 1), None, None);
        assert!(matches!(result, Err(DomainError::InvalidJobTitle { .. })));
    }

    #[test]
    fn test_create_rejects_inverted_salary_range() {
        let result = Job::create("Engineer".into(), Some(90_000), Some(50_000));
        assert!(matches!(result, Err(DomainError::InvalidSalaryRange { .. })));
    }

    #[test]
    fn test_half_open_salary_range_is_valid() {
        assert!(Job::create("Engineer".into(), Some(50_000), None).is_ok());
        assert!(Job::create("Engineer".into(), None, Some(90_000)).is_ok());
    }

    #[test]
    fn test_set_title_refreshes_updated_at() {
        let mut job = Job::create("Engineer".into(), None, None).unwrap();
        let before = job.updated_at();
        job.set_title("Senior Engineer".into()).unwrap();
        assert_eq!(job.title(), "Senior Engineer");
        assert!(job.updated_at() >= before);
    }

    #[test]
    fn test_set_min_salary_respects_existing_max() {
        let mut job = Job::create("Engineer".into(), None, Some(60_000)).unwrap();
        let result = job.set_min_salary(70_000);
        assert!(matches!(result, Err(DomainError::InvalidSalaryRange { .. })));
        // Failed mutation leaves the field untouched
        assert_eq!(job.min_salary(), None);
    }

    #[test]
    fn test_assign_id() {
        let mut job = Job::create("Engineer".into(), None, None).unwrap();
        job.assign_id(JobId::new(1));
        assert_eq!(job.id(), Some(JobId::new(1)));
    }

    #[test]
    fn test_reconstitute_preserves_state() {
        let created = Utc::now();
        let job = Job::reconstitute(
            JobId::new(5),
            "Engineer".into(),
            Some(1),
            Some(2),
            created,
            created,
        );
        assert_eq!(job.id(), Some(JobId::new(5)));
        assert_eq!(job.created_at(), created);
    }
}
