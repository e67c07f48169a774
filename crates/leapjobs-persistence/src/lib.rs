//! Leapjobs Persistence Layer
//!
//! Infrastructure layer providing repository implementations for the
//! domain's `JobRepository` contract.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │            Infrastructure Layer             │
//! ├─────────────────────────────────────────────┤
//! │  memory/                                    │
//! │  ─────────                                  │
//! │  InMemoryJobRepository                      │
//! └─────────────────────────────────────────────┘
//!                      ▲
//!                      │ implements
//!                      ▼
//! ┌─────────────────────────────────────────────┐
//! │               Domain Layer                  │
//! │               JobRepository                 │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The in-memory backend is the reference store for development and
//! tests. A durable backend implements the same trait against its
//! store's native API; the rest of the system is unaffected by the
//! choice.
//!
//! ## Usage
//!
//! ```ignore
//! use leapjobs_persistence::memory::InMemoryJobRepository;
//! use leapjobs_domain::JobRepository;
//! use std::sync::Arc;
//!
//! let repo: Arc<dyn JobRepository> = Arc::new(InMemoryJobRepository::new());
//! ```

pub mod memory;

// Re-export commonly used types
pub use memory::InMemoryJobRepository;
