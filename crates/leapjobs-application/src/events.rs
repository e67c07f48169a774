//! Application layer events
//!
//! Application events represent completed use cases and are suitable
//! for external consumers (webhooks, audit logs, notifications). They
//! are emitted after the transaction boundary commits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Application-level event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApplicationEvent {
    /// Job was successfully created
    JobCreated {
        job_id: u64,
        timestamp: DateTime<Utc>,
    },

    /// Job was updated (fully or partially)
    JobUpdated {
        job_id: u64,
        timestamp: DateTime<Utc>,
    },

    /// Job was deleted
    JobDeleted {
        job_id: u64,
        timestamp: DateTime<Utc>,
    },
}

impl ApplicationEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            ApplicationEvent::JobCreated { .. } => "JobCreated",
            ApplicationEvent::JobUpdated { .. } => "JobUpdated",
            ApplicationEvent::JobDeleted { .. } => "JobDeleted",
        }
    }

    /// Get the event timestamp
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            ApplicationEvent::JobCreated { timestamp, .. } => *timestamp,
            ApplicationEvent::JobUpdated { timestamp, .. } => *timestamp,
            ApplicationEvent::JobDeleted { timestamp, .. } => *timestamp,
        }
    }
}

/// Event publisher port
///
/// Infrastructure provides implementations for in-process handlers,
/// audit logging, or message queues.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish an application event
    async fn publish(&self, event: ApplicationEvent);
}

/// No-op event publisher for testing
pub struct NoOpEventPublisher;

#[async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: ApplicationEvent) {
        // No-op: events are discarded
    }
}

/// In-memory event collector for testing
#[derive(Default)]
pub struct InMemoryEventPublisher {
    events: std::sync::Mutex<Vec<ApplicationEvent>>,
}

impl InMemoryEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all collected events
    pub fn events(&self) -> Vec<ApplicationEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clear collected events
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, event: ApplicationEvent) {
        self.events.lock().unwrap().push(event);
    }
}
