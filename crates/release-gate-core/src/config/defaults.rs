//! Default configuration values

use super::types::Config;

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "release-gate.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "release-gate.yaml";

/// File the release tool reads its changelog configuration from
pub const VERSIONRC_FILE: &str = ".versionrc.json";

/// Default release tool program
pub const DEFAULT_PROGRAM: &str = "npx";

/// Default release tool arguments
pub const DEFAULT_TOOL_ARGS: &[&str] = &["standard-version"];

/// Default dry-run switch
pub const DEFAULT_DRY_RUN_FLAG: &str = "--dry-run";

/// Sections whose presence in a dry run means a release is due
pub const DEFAULT_RELEASE_SECTIONS: &[&str] = &[
    "Features",
    "Bug Fixes",
    "Performance Improvements",
    "Breaking Changes",
];

/// `###` headings
pub const DEFAULT_HEADING_LEVEL: u8 = 3;

/// Default changelog header
pub const DEFAULT_CHANGELOG_HEADER: &str = "# Changelog\n\nAll notable changes to this project will be documented in this file. See [standard-version](https://github.com/conventional-changelog/standard-version) for commit guidelines.\n";

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".release-gate.toml",
        ".release-gate.yaml",
    ]
}

/// Generate the default configuration as TOML
pub fn default_config_toml() -> crate::Result<String> {
    Ok(toml::to_string_pretty(&Config::default())?)
}

/// Generate the default configuration as YAML
pub fn default_config_yaml() -> crate::Result<String> {
    serde_yaml::to_string(&Config::default())
        .map_err(|e| crate::GateError::from(crate::error::ConfigError::YamlError(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_toml_parses_back() {
        let content = default_config_toml().unwrap();
        let config: Config = toml::from_str(&content).unwrap();
        assert_eq!(config.tool.program, DEFAULT_PROGRAM);
        assert_eq!(config.changelog.types.len(), 7);
    }

    #[test]
    fn test_toml_preferred_first() {
        assert_eq!(config_file_names()[0], DEFAULT_CONFIG_TOML);
    }
}
