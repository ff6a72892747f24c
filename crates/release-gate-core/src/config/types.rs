//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_CHANGELOG_HEADER, DEFAULT_DRY_RUN_FLAG, DEFAULT_HEADING_LEVEL, DEFAULT_PROGRAM,
    DEFAULT_RELEASE_SECTIONS, DEFAULT_TOOL_ARGS,
};

/// Main configuration for the release gate
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External release tool invocation
    pub tool: ToolConfig,

    /// Gate decision settings
    pub gate: GateConfig,

    /// Changelog configuration handed to the release tool
    pub changelog: ChangelogConfig,
}

/// How to invoke the external changelog/release tool
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Program to execute (e.g. `npx`)
    pub program: String,

    /// Arguments passed on every invocation
    pub args: Vec<String>,

    /// Extra argument that switches the tool into dry-run mode
    pub dry_run_flag: String,

    /// Working directory for the tool (defaults to the current directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            args: DEFAULT_TOOL_ARGS.iter().map(|s| s.to_string()).collect(),
            dry_run_flag: DEFAULT_DRY_RUN_FLAG.to_string(),
            working_dir: None,
        }
    }
}

impl ToolConfig {
    /// Render the invocation as a shell-like string, for messages and logs
    pub fn display_command(&self, dry_run: bool) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.args.iter().cloned());
        if dry_run && !self.dry_run_flag.is_empty() {
            parts.push(self.dry_run_flag.clone());
        }
        parts.join(" ")
    }
}

/// Settings that decide whether a dry run is release-worthy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Changelog section titles that count as release-worthy
    pub sections: Vec<String>,

    /// Markdown heading level of the sections (3 means `### `)
    pub heading_level: u8,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            sections: DEFAULT_RELEASE_SECTIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            heading_level: DEFAULT_HEADING_LEVEL,
        }
    }
}

/// Changelog configuration consumed by the release tool
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Header written at the top of the changelog file
    pub header: String,

    /// Lifecycle steps the tool should skip
    pub skip: SkipConfig,

    /// Commit type to section mapping
    pub types: Vec<CommitTypeConfig>,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        let types = [
            ("feat", "Features"),
            ("fix", "Bug Fixes"),
            ("chore", "Chores"),
            ("docs", "Documentation"),
            ("refactor", "Code Refactoring"),
            ("perf", "Performance Improvements"),
            ("test", "Tests"),
        ]
        .into_iter()
        .map(|(commit_type, section)| CommitTypeConfig::new(commit_type, section))
        .collect();

        Self {
            header: DEFAULT_CHANGELOG_HEADER.to_string(),
            skip: SkipConfig::default(),
            types,
        }
    }
}

impl ChangelogConfig {
    /// Section title for a commit type, if the type is mapped
    pub fn section_for(&self, commit_type: &str) -> Option<&str> {
        self.types
            .iter()
            .find(|t| t.commit_type == commit_type)
            .map(|t| t.section.as_str())
    }

    /// Render in the shape the release tool reads from `.versionrc.json`
    pub fn to_versionrc(&self) -> serde_json::Value {
        let types: Vec<serde_json::Value> = self
            .types
            .iter()
            .map(|t| {
                let mut entry = serde_json::json!({
                    "type": t.commit_type,
                    "section": t.section,
                });
                if t.hidden {
                    entry["hidden"] = serde_json::Value::Bool(true);
                }
                entry
            })
            .collect();

        serde_json::json!({
            "header": self.header,
            "skip": { "tag": self.skip.tag },
            "types": types,
        })
    }
}

/// Release tool lifecycle steps to skip
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkipConfig {
    /// Skip creating the git tag
    pub tag: bool,
}

/// Configuration for a commit type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitTypeConfig {
    /// Commit type keyword (e.g. `feat`)
    #[serde(rename = "type")]
    pub commit_type: String,

    /// Section header in changelog
    pub section: String,

    /// Whether to hide this type from changelog
    #[serde(default)]
    pub hidden: bool,
}

impl CommitTypeConfig {
    /// Create a visible commit type mapping
    pub fn new(commit_type: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            commit_type: commit_type.into(),
            section: section.into(),
            hidden: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_type_mapping() {
        let changelog = ChangelogConfig::default();
        assert_eq!(changelog.types.len(), 7);
        assert_eq!(changelog.section_for("feat"), Some("Features"));
        assert_eq!(changelog.section_for("perf"), Some("Performance Improvements"));
        assert_eq!(changelog.section_for("refactor"), Some("Code Refactoring"));
        assert_eq!(changelog.section_for("style"), None);
        assert!(!changelog.skip.tag);
        assert!(changelog.header.starts_with("# Changelog\n"));
    }

    #[test]
    fn test_display_command() {
        let tool = ToolConfig::default();
        assert_eq!(tool.display_command(true), "npx standard-version --dry-run");
        assert_eq!(tool.display_command(false), "npx standard-version");
    }

    #[test]
    fn test_to_versionrc_shape() {
        let mut changelog = ChangelogConfig::default();
        changelog.types[2].hidden = true;

        let rc = changelog.to_versionrc();
        assert_eq!(rc["skip"]["tag"], serde_json::Value::Bool(false));
        assert_eq!(rc["types"][0]["type"], "feat");
        assert_eq!(rc["types"][0]["section"], "Features");
        assert!(rc["types"][0].get("hidden").is_none());
        assert_eq!(rc["types"][2]["hidden"], serde_json::Value::Bool(true));
        assert_eq!(rc["header"].as_str(), Some(changelog.header.as_str()));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str("tool:\n  program: pnpm\n").unwrap();
        assert_eq!(config.tool.program, "pnpm");
        assert_eq!(config.tool.args, vec!["standard-version".to_string()]);
        assert_eq!(config.gate.heading_level, 3);
        assert_eq!(config.gate.sections.len(), 4);
    }
}
