//! Data models for the layering audit

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which crates the audit restricts, and which they must not reference
///
/// Crates are addressed as `{workspace_prefix}-{layer}`; in source they
/// appear with the hyphen folded to an underscore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayeringConfig {
    /// Workspace crate-name prefix, e.g. `leapjobs`
    pub workspace_prefix: String,
    /// Layers whose crates may not reach into the forbidden layers
    pub restricted_layers: Vec<String>,
    /// Presentation-side layers no restricted crate may reference
    pub forbidden_layers: Vec<String>,
}

impl LayeringConfig {
    /// The audit shipped for this workspace: service and persistence
    /// code must not depend on presentation code
    pub fn new(workspace_prefix: impl Into<String>) -> Self {
        Self {
            workspace_prefix: workspace_prefix.into(),
            restricted_layers: vec![
                "domain".to_string(),
                "application".to_string(),
                "persistence".to_string(),
            ],
            forbidden_layers: vec![
                "api".to_string(),
                "web".to_string(),
                "cli".to_string(),
                "tui".to_string(),
            ],
        }
    }

    /// Whether a crate directory name falls under the restriction
    pub fn is_restricted_crate(&self, crate_name: &str) -> bool {
        self.restricted_layers
            .iter()
            .any(|layer| crate_name == self.crate_name(layer))
    }

    /// Source identifiers of the forbidden crates (`leapjobs_api`, ...)
    pub fn forbidden_idents(&self) -> Vec<String> {
        self.forbidden_layers
            .iter()
            .map(|layer| self.crate_name(layer).replace('-', "_"))
            .collect()
    }

    fn crate_name(&self, layer: &str) -> String {
        format!("{}-{}", self.workspace_prefix, layer)
    }
}

impl Default for LayeringConfig {
    fn default() -> Self {
        Self::new("leapjobs")
    }
}

/// One forbidden dependency edge found in the source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolatingEdge {
    /// Crate the reference was found in
    pub source_crate: String,
    /// Crate identifier the reference points at
    pub target_crate: String,
    /// File containing the reference
    pub file: PathBuf,
    /// Line number (1-based)
    pub line: usize,
    /// The offending line of source
    pub snippet: String,
}

/// Outcome of one audit run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayeringReport {
    /// Every forbidden edge found; empty means pass
    pub violations: Vec<ViolatingEdge>,
    /// Number of source files scanned
    pub files_scanned: usize,
}

impl LayeringReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}
