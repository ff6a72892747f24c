//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use release_gate_core::config::{load_config, load_config_or_default, Config};

use commands::{CheckCommand, CompletionsCommand, InitCommand, ReleaseCommand};

/// Release Gate - only cut a release when the changelog has something to say
#[derive(Debug, Parser)]
#[command(name = "release-gate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Configuration file (skips the config file search)
    #[arg(long, global = true, env = "RELEASE_GATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Create a new release even if the changelog would be empty
    #[arg(long, global = true)]
    pub ignore_empty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the release tool if the dry run finds release-worthy commits (default)
    Release(ReleaseCommand),

    /// Dry-run the release tool and report release-worthy sections
    Check(CheckCommand),

    /// Write a default configuration file
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command, returning the process exit code
    pub fn execute(self) -> anyhow::Result<i32> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            None => ReleaseCommand::default().execute(&self),
            Some(Commands::Release(ref cmd)) => cmd.execute(&self),
            Some(Commands::Check(ref cmd)) => cmd.execute(&self),
            Some(Commands::Init(ref cmd)) => cmd.execute(&self),
            Some(Commands::Completions(ref cmd)) => cmd.execute(&self),
        }
    }

    /// Load the configuration named by `--config`, or search for one
    pub fn load_config(&self) -> anyhow::Result<(Config, Option<PathBuf>)> {
        if let Some(path) = &self.config {
            debug!(path = %path.display(), "using explicit config file");
            return Ok((load_config(path)?, Some(path.clone())));
        }

        let cwd = std::env::current_dir()?;
        Ok(load_config_or_default(&cwd)?)
    }

    /// Whether informational text should be printed
    pub fn show_text(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_release() {
        let cli = Cli::parse_from(["release-gate"]);
        assert!(cli.command.is_none());
        assert!(!cli.ignore_empty);
    }

    #[test]
    fn test_ignore_empty_top_level() {
        let cli = Cli::parse_from(["release-gate", "--ignore-empty"]);
        assert!(cli.ignore_empty);
    }

    #[test]
    fn test_ignore_empty_after_subcommand() {
        let cli = Cli::parse_from(["release-gate", "release", "--ignore-empty"]);
        assert!(matches!(cli.command, Some(Commands::Release(_))));
        assert!(cli.ignore_empty);
    }

    #[test]
    fn test_json_quiet_hides_text() {
        let cli = Cli::parse_from(["release-gate", "--format", "json", "check"]);
        assert!(!cli.show_text());
        let cli = Cli::parse_from(["release-gate", "-q"]);
        assert!(!cli.show_text());
        let cli = Cli::parse_from(["release-gate"]);
        assert!(cli.show_text());
    }
}
