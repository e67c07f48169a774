//! Layering rule checker
//!
//! Audits the workspace source for dependency edges from restricted
//! crates (service, persistence, domain) into presentation crates.
//! Runs once per verification cycle, offline - never in the request
//! path.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{ArchRuleError, ArchRuleResult};
use crate::models::{LayeringConfig, LayeringReport, ViolatingEdge};
use crate::scanner::SourceScanner;

/// Static audit over the workspace's crate dependency edges
pub struct LayeringChecker {
    config: LayeringConfig,
    scanner: SourceScanner,
}

impl LayeringChecker {
    pub fn new(config: LayeringConfig) -> Self {
        Self {
            config,
            scanner: SourceScanner::new(),
        }
    }

    /// Audit the workspace rooted at `workspace_root`
    ///
    /// Scans `crates/<restricted>/src/**/*.rs` and reports every
    /// reference to a forbidden crate as a violating edge. An empty
    /// violation list means the workspace passes.
    pub fn check(&self, workspace_root: &Path) -> ArchRuleResult<LayeringReport> {
        let crates_dir = workspace_root.join("crates");
        if !crates_dir.is_dir() {
            return Err(ArchRuleError::InvalidWorkspace(format!(
                "no crates directory under {}",
                workspace_root.display()
            )));
        }

        let forbidden = self.config.forbidden_idents();
        let mut report = LayeringReport::default();

        for entry in fs::read_dir(&crates_dir)? {
            let entry = entry?;
            if !entry.path().is_dir() {
                continue;
            }
            let crate_name = entry.file_name().to_string_lossy().into_owned();
            if !self.config.is_restricted_crate(&crate_name) {
                continue;
            }
            self.check_crate(&crate_name, &entry.path().join("src"), &forbidden, &mut report)?;
        }

        Ok(report)
    }

    fn check_crate(
        &self,
        crate_name: &str,
        src_dir: &Path,
        forbidden: &[String],
        report: &mut LayeringReport,
    ) -> ArchRuleResult<()> {
        if !src_dir.is_dir() {
            return Ok(());
        }

        for entry in WalkDir::new(src_dir) {
            let entry = entry.map_err(|e| {
                ArchRuleError::InvalidWorkspace(format!("walk failed under {}: {}", src_dir.display(), e))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.path().extension().and_then(|e| e.to_str()) != Some("rs") {
                continue;
            }

            report.files_scanned += 1;
            for reference in self.scanner.scan_file(entry.path())? {
                if forbidden.contains(&reference.ident) {
                    report.violations.push(ViolatingEdge {
                        source_crate: crate_name.to_string(),
                        target_crate: reference.ident,
                        file: entry.path().to_path_buf(),
                        line: reference.line,
                        snippet: reference.snippet,
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for LayeringChecker {
    fn default() -> Self {
        Self::new(LayeringConfig::default())
    }
}
