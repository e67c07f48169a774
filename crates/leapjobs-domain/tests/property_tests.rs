//! Property-based tests for domain invariants
//!
//! These tests verify that the Job aggregate and the pagination types
//! maintain their invariants across all possible inputs.

use proptest::prelude::*;

use leapjobs_domain::job::MAX_TITLE_LEN;
use leapjobs_domain::pagination::MAX_PAGE_SIZE;
use leapjobs_domain::{DomainError, Job, JobId, Page, PageRequest};

// ============================================================================
// JobId Property Tests
// ============================================================================

proptest! {
    /// JobId roundtrip: to_string -> from_string == original
    #[test]
    fn test_job_id_string_roundtrip(raw in any::<u64>()) {
        let id = JobId::new(raw);
        let parsed = JobId::from_string(&id.to_string()).unwrap();
        prop_assert_eq!(id, parsed);
    }

    /// JobId JSON roundtrip
    #[test]
    fn test_job_id_json_roundtrip(raw in any::<u64>()) {
        let id = JobId::new(raw);
        let json = serde_json::to_string(&id).unwrap();
        let back: JobId = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(id, back);
    }
}

// ============================================================================
// Job Invariant Property Tests
// ============================================================================

proptest! {
    /// Any non-empty title up to the limit is accepted with a valid range
    #[test]
    fn test_create_accepts_valid_input(
        title in "[a-zA-Z][a-zA-Z0-9 ]{0,80}",
        lo in 0i64..1_000_000,
        span in 0i64..1_000_000,
    ) {
        let job = Job::create(title.clone(), Some(lo), Some(lo + span)).unwrap();
        prop_assert_eq!(job.title(), title.as_str());
        prop_assert!(job.id().is_none());
    }

    /// Inverted salary ranges are always rejected
    #[test]
    fn test_create_rejects_inverted_range(
        lo in 0i64..1_000_000,
        span in 1i64..1_000_000,
    ) {
        let result = Job::create("Engineer".into(), Some(lo + span), Some(lo));
        prop_assert!(matches!(result, Err(DomainError::InvalidSalaryRange { .. })), "expected InvalidSalaryRange");
    }

    /// Titles beyond the limit are always rejected
    #[test]
    fn test_create_rejects_overlong_title(extra in 1usize..50) {
        let result = Job::create("x".repeat(MAX_TITLE_LEN + extra), None, None);
        prop_assert!(matches!(result, Err(DomainError::InvalidJobTitle { .. })), "expected InvalidJobTitle");
    }
}

// ============================================================================
// Pagination Property Tests
// ============================================================================

proptest! {
    /// total_pages is always ceil(total_items / size)
    #[test]
    fn test_total_pages_is_ceiling(
        size in 1u32..=MAX_PAGE_SIZE,
        total in 0u64..100_000,
    ) {
        let request = PageRequest::new(0, size).unwrap();
        let page: Page<u64> = Page::new(vec![], &request, total);
        let expected = total.div_ceil(size as u64) as u32;
        prop_assert_eq!(page.total_pages, expected);
        // Cross-check against the naive formula
        if total > 0 {
            prop_assert!(u64::from(page.total_pages) * u64::from(size) >= total);
            prop_assert!(u64::from(page.total_pages - 1) * u64::from(size) < total);
        }
    }

    /// map never changes paging metadata
    #[test]
    fn test_map_preserves_metadata(
        size in 1u32..100,
        page_index in 0u32..100,
        total in 0u64..10_000,
    ) {
        let request = PageRequest::new(page_index, size).unwrap();
        let page: Page<u32> = Page::new(vec![], &request, total);
        let mapped = page.clone().map(|n| n as u64);
        prop_assert_eq!(mapped.page, page.page);
        prop_assert_eq!(mapped.size, page.size);
        prop_assert_eq!(mapped.total_items, page.total_items);
        prop_assert_eq!(mapped.total_pages, page.total_pages);
    }
}
