//! Source scanning for cross-crate references
//!
//! Extracts the crate identifiers a Rust source file refers to, by
//! line, so the checker can match them against the forbidden set. The
//! scan is lexical: `use` declarations and path roots, with line
//! comments stripped. That is sufficient for an offline audit - it
//! runs over source the compiler has already accepted.

use std::fs;
use std::path::Path;

use regex::Regex;

/// One crate-level reference found in a source file
#[derive(Debug, Clone, PartialEq)]
pub struct CrateReference {
    /// Referenced crate identifier, e.g. `leapjobs_api`
    pub ident: String,
    /// Line number (1-based)
    pub line: usize,
    /// The trimmed source line
    pub snippet: String,
}

/// Lexical scanner for crate references
pub struct SourceScanner {
    use_re: Regex,
    path_re: Regex,
}

impl SourceScanner {
    pub fn new() -> Self {
        Self {
            // `use foo::...` and `pub use foo::...`, including `use foo;`
            use_re: Regex::new(r"^\s*(?:pub(?:\([^)]*\))?\s+)?use\s+([A-Za-z_][A-Za-z0-9_]*)")
                .expect("static regex"),
            // any `foo::` path root elsewhere in the line
            path_re: Regex::new(r"([A-Za-z_][A-Za-z0-9_]*)\s*::").expect("static regex"),
        }
    }

    /// Scan one file, returning each referenced crate identifier once
    /// per line it appears on
    pub fn scan_file(&self, path: &Path) -> std::io::Result<Vec<CrateReference>> {
        let content = fs::read_to_string(path)?;
        Ok(self.scan_source(&content))
    }

    /// Scan already-loaded source text
    pub fn scan_source(&self, content: &str) -> Vec<CrateReference> {
        let mut references = Vec::new();
        for (index, raw_line) in content.lines().enumerate() {
            // Strip line comments; doc comments fall out with them
            let line = raw_line.split("//").next().unwrap_or("");
            if line.trim().is_empty() {
                continue;
            }

            let mut seen_on_line: Vec<&str> = Vec::new();
            if let Some(caps) = self.use_re.captures(line) {
                if let Some(m) = caps.get(1) {
                    seen_on_line.push(m.as_str());
                }
            }
            for caps in self.path_re.captures_iter(line) {
                if let Some(m) = caps.get(1) {
                    if !seen_on_line.contains(&m.as_str()) {
                        seen_on_line.push(m.as_str());
                    }
                }
            }

            for ident in seen_on_line {
                references.push(CrateReference {
                    ident: ident.to_string(),
                    line: index + 1,
                    snippet: raw_line.trim().to_string(),
                });
            }
        }
        references
    }
}

impl Default for SourceScanner {
    fn default() -> Self {
        Self::new()
    }
}
