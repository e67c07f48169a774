//! In-Memory Job Repository Implementation

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use leapjobs_domain::{
    errors::DomainResult,
    job::Job,
    pagination::{Page, PageRequest, SortOrder},
    repositories::JobRepository,
    value_objects::JobId,
};

/// Mutable store state guarded by a single lock
///
/// The id sequence lives beside the records so that an insert and its
/// id assignment happen under one write lock.
#[derive(Debug)]
struct Store {
    records: BTreeMap<u64, Job>,
    next_id: u64,
}

impl Store {
    fn allocate_id(&mut self) -> JobId {
        let id = JobId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Keep the sequence ahead of explicitly supplied identities so an
    /// upsert at a high id can never collide with a later insert.
    fn observe_id(&mut self, id: JobId) {
        if id.value() >= self.next_id {
            self.next_id = id.value() + 1;
        }
    }
}

/// Thread-safe in-memory implementation of `JobRepository`
///
/// Uses an `RwLock` for concurrent read access with exclusive write
/// access; each operation takes the lock exactly once, making it atomic
/// with respect to the others. Records are held in a `BTreeMap` keyed
/// by identity, giving listings their stable id-ascending order.
/// Stores cloned `Job` instances to maintain isolation.
#[derive(Debug)]
pub struct InMemoryJobRepository {
    store: RwLock<Store>,
}

impl InMemoryJobRepository {
    /// Create a new empty in-memory job repository
    ///
    /// The id sequence starts at 1.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Create with initial jobs (useful for testing)
    ///
    /// Jobs without identity are assigned one from the sequence.
    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        let repo = Self::new();
        {
            let mut store = repo.store.write();
            for job in jobs {
                let mut persisted = job;
                let id = match persisted.id() {
                    Some(id) => {
                        store.observe_id(id);
                        id
                    }
                    None => {
                        let id = store.allocate_id();
                        persisted.assign_id(id);
                        id
                    }
                };
                store.records.insert(id.value(), persisted);
            }
        }
        repo
    }

    /// Clear all jobs (for testing)
    pub fn clear(&self) {
        self.store.write().records.clear();
    }
}

impl Default for InMemoryJobRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn save(&self, job: &Job) -> DomainResult<Job> {
        let mut store = self.store.write();
        let mut persisted = job.clone();
        let id = match persisted.id() {
            Some(id) => {
                // Upsert: replace the record at this identity, or insert
                // at it when no record exists
                store.observe_id(id);
                id
            }
            None => {
                let id = store.allocate_id();
                persisted.assign_id(id);
                id
            }
        };
        debug!("Saving job {} to in-memory store", id);
        store.records.insert(id.value(), persisted.clone());
        Ok(persisted)
    }

    async fn find_by_id(&self, id: JobId) -> DomainResult<Option<Job>> {
        debug!("Finding job by id: {}", id);
        let store = self.store.read();
        Ok(store.records.get(&id.value()).cloned())
    }

    async fn find_all(&self, request: &PageRequest) -> DomainResult<Page<Job>> {
        debug!(
            "Listing jobs, page {} size {}",
            request.page(),
            request.size()
        );
        let store = self.store.read();
        let total = store.records.len() as u64;
        let values = store.records.values();
        let items: Vec<Job> = match request.sort() {
            SortOrder::IdAsc => values
                .skip(request.offset())
                .take(request.size() as usize)
                .cloned()
                .collect(),
            SortOrder::IdDesc => values
                .rev()
                .skip(request.offset())
                .take(request.size() as usize)
                .cloned()
                .collect(),
        };
        Ok(Page::new(items, request, total))
    }

    async fn delete_by_id(&self, id: JobId) -> DomainResult<()> {
        debug!("Deleting job: {}", id);
        let mut store = self.store.write();
        store.records.remove(&id.value());
        Ok(())
    }

    async fn exists(&self, id: JobId) -> DomainResult<bool> {
        let store = self.store.read();
        Ok(store.records.contains_key(&id.value()))
    }

    async fn count(&self) -> DomainResult<u64> {
        let store = self.store.read();
        Ok(store.records.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engineer(title: &str) -> Job {
        Job::create(title.to_string(), Some(50_000), Some(90_000)).unwrap()
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryJobRepository::new();

        let first = repo.save(&engineer("Engineer")).await.unwrap();
        let second = repo.save(&engineer("Analyst")).await.unwrap();

        assert_eq!(first.id(), Some(JobId::new(1)));
        assert_eq!(second.id(), Some(JobId::new(2)));
    }

    #[tokio::test]
    async fn test_save_with_identity_replaces_record() {
        let repo = InMemoryJobRepository::new();
        let saved = repo.save(&engineer("Engineer")).await.unwrap();

        let mut updated = saved.clone();
        updated.set_title("Staff Engineer".into()).unwrap();
        repo.save(&updated).await.unwrap();

        let found = repo.find_by_id(saved.id().unwrap()).await.unwrap().unwrap();
        assert_eq!(found.title(), "Staff Engineer");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_save_upserts_at_unknown_identity() {
        let repo = InMemoryJobRepository::new();

        let mut job = engineer("Engineer");
        job.assign_id(JobId::new(10));
        let saved = repo.save(&job).await.unwrap();
        assert_eq!(saved.id(), Some(JobId::new(10)));

        // Sequence moves past the explicit identity
        let next = repo.save(&engineer("Analyst")).await.unwrap();
        assert_eq!(next.id(), Some(JobId::new(11)));
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let repo = InMemoryJobRepository::new();
        let found = repo.find_by_id(JobId::new(99)).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryJobRepository::new();
        let saved = repo.save(&engineer("Engineer")).await.unwrap();
        let id = saved.id().unwrap();

        repo.delete_by_id(id).await.unwrap();
        assert!(!repo.exists(id).await.unwrap());

        // Second delete of the same id must also succeed
        repo.delete_by_id(id).await.unwrap();
        assert!(!repo.exists(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_ids_are_never_reused_after_delete() {
        let repo = InMemoryJobRepository::new();
        let first = repo.save(&engineer("Engineer")).await.unwrap();
        repo.delete_by_id(first.id().unwrap()).await.unwrap();

        let second = repo.save(&engineer("Analyst")).await.unwrap();
        assert_ne!(second.id(), first.id());
    }

    #[tokio::test]
    async fn test_find_all_pages_in_id_order() {
        let repo = InMemoryJobRepository::new();
        for n in 0..5 {
            repo.save(&engineer(&format!("Job {}", n))).await.unwrap();
        }

        let request = PageRequest::new(1, 2).unwrap();
        let page = repo.find_all(&request).await.unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id(), Some(JobId::new(3)));
        assert_eq!(page.items[1].id(), Some(JobId::new(4)));
        assert_eq!(page.total_items, 5);
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn test_find_all_descending() {
        let repo = InMemoryJobRepository::new();
        for n in 0..3 {
            repo.save(&engineer(&format!("Job {}", n))).await.unwrap();
        }

        let request = PageRequest::new(0, 2).unwrap().with_sort(SortOrder::IdDesc);
        let page = repo.find_all(&request).await.unwrap();

        assert_eq!(page.items[0].id(), Some(JobId::new(3)));
        assert_eq!(page.items[1].id(), Some(JobId::new(2)));
    }

    #[tokio::test]
    async fn test_find_all_past_the_end_is_empty() {
        let repo = InMemoryJobRepository::new();
        repo.save(&engineer("Engineer")).await.unwrap();

        let request = PageRequest::new(5, 10).unwrap();
        let page = repo.find_all(&request).await.unwrap();

        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 1);
    }

    #[tokio::test]
    async fn test_with_jobs_seeds_sequence() {
        let mut seeded = engineer("Engineer");
        seeded.assign_id(JobId::new(7));
        let repo = InMemoryJobRepository::with_jobs(vec![seeded, engineer("Analyst")]);

        assert_eq!(repo.count().await.unwrap(), 2);
        assert!(repo.exists(JobId::new(7)).await.unwrap());

        let next = repo.save(&engineer("Manager")).await.unwrap();
        assert_eq!(next.id(), Some(JobId::new(9)));
    }
}
