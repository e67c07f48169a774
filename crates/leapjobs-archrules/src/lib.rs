//! Leapjobs Layering Audit
//!
//! Offline verification that the workspace's layering discipline
//! holds: no crate in the service, persistence, or domain layer may
//! reference a presentation-layer crate. The audit scans the crates'
//! source for `use` declarations and path roots and reports each
//! forbidden edge as source crate, target crate, file, and line.
//!
//! ```ignore
//! use leapjobs_archrules::{LayeringChecker, LayeringConfig};
//!
//! let report = LayeringChecker::new(LayeringConfig::default())
//!     .check(workspace_root)?;
//! assert!(report.is_clean(), "{:?}", report.violations);
//! ```

pub mod checker;
pub mod error;
pub mod models;
pub mod scanner;

// Re-export commonly used types
pub use checker::LayeringChecker;
pub use error::{ArchRuleError, ArchRuleResult};
pub use models::{LayeringConfig, LayeringReport, ViolatingEdge};
pub use scanner::SourceScanner;
