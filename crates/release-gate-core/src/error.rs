//! Error types for the release gate

use thiserror::Error;

/// Result type alias using GateError
pub type Result<T> = std::result::Result<T, GateError>;

/// Main error type for release gate operations
#[derive(Debug, Error)]
pub enum GateError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// External tool errors
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// Heading pattern could not be compiled
    #[error("Invalid heading pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while running the external release tool
#[derive(Debug, Error)]
pub enum ToolError {
    /// The process could not be started
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited non-zero
    #[error("Command failed: {command} (exit code {code})\n{stderr}")]
    Failed {
        command: String,
        code: i32,
        stderr: String,
    },

    /// The process was terminated without an exit code
    #[error("Command terminated by signal: {0}")]
    Signal(String),
}

impl GateError {
    /// Whether this error came from configuration loading or validation
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_message_includes_stderr() {
        let err = GateError::from(ToolError::Failed {
            command: "npx standard-version --dry-run".to_string(),
            code: 1,
            stderr: "fatal: not a git repository".to_string(),
        });
        let msg = err.to_string();
        assert!(msg.contains("exit code 1"));
        assert!(msg.contains("not a git repository"));
        assert!(!err.is_config());
    }

    #[test]
    fn test_config_error_is_config() {
        let err = GateError::from(ConfigError::InvalidValue {
            field: "gate.sections".to_string(),
            message: "at least one section is required".to_string(),
        });
        assert!(err.is_config());
    }
}
