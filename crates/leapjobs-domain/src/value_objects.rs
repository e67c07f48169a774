//! Value objects representing immutable domain concepts

use std::fmt;
use std::num::ParseIntError;

use serde::{Deserialize, Serialize};

/// Job identifier - a sequence-based identifier assigned by the store
///
/// Identity is opaque to callers: a `JobId` is only ever obtained from a
/// persisted record, never fabricated by domain logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(u64);

impl JobId {
    /// Wrap a raw identity value
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Create from string representation
    pub fn from_string(s: &str) -> Result<Self, ParseIntError> {
        Ok(Self(s.parse()?))
    }

    /// The raw identity value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for JobId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_id_roundtrip() {
        let id = JobId::new(42);
        let parsed = JobId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_job_id_json_is_transparent() {
        let id = JobId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let back: JobId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_job_id_ordering() {
        assert!(JobId::new(1) < JobId::new(2));
    }
}
