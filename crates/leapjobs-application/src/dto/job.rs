//! Job DTO
//!
//! Every field is carried as an explicit `Option` so a partial update
//! can tell an omitted field apart from a supplied one. `None` always
//! means "absent".

use serde::{Deserialize, Serialize};

use leapjobs_domain::job::Job;

/// Boundary-facing projection of a `Job`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDto {
    /// Identity; absent for not-yet-created records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_salary: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_salary: Option<i64>,
}

impl JobDto {
    /// Create from domain aggregate
    pub fn from_domain(job: &Job) -> Self {
        Self {
            id: job.id().map(|id| id.value()),
            title: Some(job.title().to_string()),
            min_salary: job.min_salary(),
            max_salary: job.max_salary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_omitted_from_json() {
        let dto = JobDto {
            title: Some("Engineer".into()),
            ..Default::default()
        };

        let json = serde_json::to_string(&dto).unwrap();
        assert_eq!(json, r#"{"title":"Engineer"}"#);
    }

    #[test]
    fn test_missing_json_fields_deserialize_as_absent() {
        let dto: JobDto = serde_json::from_str(r#"{"id":3}"#).unwrap();
        assert_eq!(dto.id, Some(3));
        assert!(dto.title.is_none());
        assert!(dto.min_salary.is_none());
        assert!(dto.max_salary.is_none());
    }

    #[test]
    fn test_from_domain_mirrors_every_field() {
        let job = Job::create("Engineer".into(), Some(1), Some(2)).unwrap();
        let dto = JobDto::from_domain(&job);
        assert_eq!(dto.id, None);
        assert_eq!(dto.title.as_deref(), Some("Engineer"));
        assert_eq!(dto.min_salary, Some(1));
        assert_eq!(dto.max_salary, Some(2));
    }
}
