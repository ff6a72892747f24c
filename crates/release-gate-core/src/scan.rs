//! Changelog heading scanner
//!
//! Looks for release-worthy section headings (e.g. `### Features`) in the
//! text a release tool prints during a dry run.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::config::{GateConfig, DEFAULT_HEADING_LEVEL, DEFAULT_RELEASE_SECTIONS};
use crate::error::{ConfigError, Result};

static DEFAULT_SCANNER: LazyLock<HeadingScanner> = LazyLock::new(|| {
    HeadingScanner::new(DEFAULT_RELEASE_SECTIONS, DEFAULT_HEADING_LEVEL)
        .expect("Invalid default heading pattern")
});

/// Matches release-worthy changelog headings, case-insensitively
#[derive(Debug, Clone)]
pub struct HeadingScanner {
    pattern: Regex,
    sections: Vec<String>,
}

impl HeadingScanner {
    /// Build a scanner for the given section titles at a heading level
    pub fn new<S: AsRef<str>>(sections: &[S], heading_level: u8) -> Result<Self> {
        let sections: Vec<String> = sections.iter().map(|s| s.as_ref().to_string()).collect();
        let alternation = sections
            .iter()
            .map(|s| regex::escape(s))
            .collect::<Vec<_>>()
            .join("|");
        let source = format!(
            "(?i){} ({})",
            "#".repeat(usize::from(heading_level)),
            alternation
        );
        debug!(pattern = %source, "compiling heading pattern");

        let pattern = Regex::new(&source).map_err(ConfigError::Pattern)?;
        Ok(Self { pattern, sections })
    }

    /// Build a scanner from the gate configuration
    pub fn from_config(config: &GateConfig) -> Result<Self> {
        Self::new(config.sections.as_slice(), config.heading_level)
    }

    /// The compiled pattern source
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Scan tool output for release-worthy headings
    pub fn scan(&self, output: &str) -> ReleaseScan {
        let mut sections: Vec<String> = Vec::new();

        for caps in self.pattern.captures_iter(output) {
            let Some(found) = caps.get(1) else { continue };
            let name = self.canonical(found.as_str());
            if !sections.contains(&name) {
                sections.push(name);
            }
        }

        debug!(matched = sections.len(), "scanned dry-run output");
        ReleaseScan { sections }
    }

    /// Map a matched heading back to the configured spelling
    fn canonical(&self, matched: &str) -> String {
        self.sections
            .iter()
            .find(|s| s.to_lowercase() == matched.to_lowercase())
            .cloned()
            .unwrap_or_else(|| matched.to_string())
    }
}

impl Default for HeadingScanner {
    fn default() -> Self {
        DEFAULT_SCANNER.clone()
    }
}

/// Outcome of scanning a dry run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReleaseScan {
    /// Release-worthy sections found, in order of first appearance
    pub sections: Vec<String>,
}

impl ReleaseScan {
    /// Whether the dry run would produce any release-worthy changelog content
    pub fn has_release_content(&self) -> bool {
        !self.sections.is_empty()
    }
}
