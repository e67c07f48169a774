//! Leapjobs Application Layer
//!
//! The Application Layer implements the job record use cases by
//! orchestrating the domain aggregate through the persistence gateway.
//! It provides a stateless service that defines transaction
//! boundaries, maps domain objects to and from presentation-safe
//! DTOs, and emits application events.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Application Layer                        │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Services      │ DTOs       │ Ports           │ Events       │
//! │  ─────────     │ ────       │ ─────           │ ──────       │
//! │  JobService    │ JobDto     │ UnitOfWork      │ AppEvent     │
//! │  JobMapper     │            │ EventPublisher  │              │
//! └──────────────────────────────────────────────────────────────┘
//!                              ▲
//!                              │ depends on
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       Domain Layer                           │
//! │     Job aggregate, JobId, pagination, repository trait       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Responsibilities
//!
//! - **Use Case Orchestration**: one gateway round trip per operation
//! - **Transaction Boundaries**: mutating operations run inside a
//!   `UnitOfWork`; reads skip it as an isolation hint
//! - **DTO Mapping**: `JobMapper` with full and partial application
//! - **Error Mapping**: domain errors become application errors;
//!   absence is signalled with `Ok(None)`, never an error
//!
//! # Non-Goals
//!
//! - Domain logic (belongs in the domain layer)
//! - Direct I/O (belongs in the infrastructure layer)
//! - HTTP/CLI handling (belongs in the presentation layer)

pub mod dto;
pub mod errors;
pub mod events;
pub mod mapper;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use dto::JobDto;
pub use errors::{ApplicationError, ApplicationResult};
pub use events::{ApplicationEvent, EventPublisher, InMemoryEventPublisher, NoOpEventPublisher};
pub use mapper::JobMapper;
pub use ports::{NoOpUnitOfWork, UnitOfWork};
pub use services::JobService;
