//! Configuration validation

use std::collections::HashSet;

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_tool(config)?;
    validate_gate(config)?;
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn invalid(field: impl Into<String>, message: impl Into<String>) -> crate::GateError {
    ConfigError::InvalidValue {
        field: field.into(),
        message: message.into(),
    }
    .into()
}

fn validate_tool(config: &Config) -> Result<()> {
    if config.tool.program.trim().is_empty() {
        return Err(invalid("tool.program", "program cannot be empty"));
    }

    Ok(())
}

fn validate_gate(config: &Config) -> Result<()> {
    if config.gate.sections.is_empty() {
        return Err(invalid("gate.sections", "at least one section is required"));
    }

    for (i, section) in config.gate.sections.iter().enumerate() {
        if section.trim().is_empty() {
            return Err(invalid(
                format!("gate.sections[{}]", i),
                "section cannot be empty",
            ));
        }
    }

    if !(1..=6).contains(&config.gate.heading_level) {
        return Err(invalid("gate.heading_level", "must be between 1 and 6"));
    }

    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    let mut seen = HashSet::new();

    for (i, entry) in config.changelog.types.iter().enumerate() {
        if entry.commit_type.trim().is_empty() {
            return Err(invalid(
                format!("changelog.types[{}].type", i),
                "commit type cannot be empty",
            ));
        }

        if entry.section.trim().is_empty() {
            return Err(invalid(
                format!("changelog.types[{}].section", i),
                "section cannot be empty",
            ));
        }

        if !seen.insert(entry.commit_type.as_str()) {
            return Err(invalid(
                format!("changelog.types[{}].type", i),
                format!("duplicate commit type '{}'", entry.commit_type),
            ));
        }
    }

    Ok(())
}
