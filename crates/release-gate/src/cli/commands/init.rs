//! Init command

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use dialoguer::Confirm;
use tracing::info;

use release_gate_core::config::{
    default_config_toml, default_config_yaml, Config, DEFAULT_CONFIG_TOML, DEFAULT_CONFIG_YAML,
    VERSIONRC_FILE,
};

use crate::cli::output;
use crate::cli::Cli;
use crate::exit_codes;

/// Write a default configuration file
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Force overwrite existing files
    #[arg(short, long)]
    pub force: bool,

    /// Never prompt; fail if a file already exists
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Write YAML instead of TOML
    #[arg(long)]
    pub yaml: bool,

    /// Also write the release tool's .versionrc.json
    #[arg(long)]
    pub versionrc: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        info!(
            force = self.force,
            yes = self.yes,
            yaml = self.yaml,
            versionrc = self.versionrc,
            "executing init command"
        );
        let cwd = std::env::current_dir()?;
        let default_name = if self.yaml {
            DEFAULT_CONFIG_YAML
        } else {
            DEFAULT_CONFIG_TOML
        };
        let config_path = self.output.clone().unwrap_or_else(|| cwd.join(default_name));

        let content = if self.yaml {
            default_config_yaml()?
        } else {
            default_config_toml()?
        };

        let mut files = vec![(config_path.clone(), content, "configuration")];

        if self.versionrc {
            let rc_path = config_path
                .parent()
                .map(|p| p.join(VERSIONRC_FILE))
                .unwrap_or_else(|| PathBuf::from(VERSIONRC_FILE));
            let rc = Config::default().changelog.to_versionrc();
            let rc_content = format!("{}\n", serde_json::to_string_pretty(&rc)?);
            files.push((rc_path, rc_content, "release tool config"));
        }

        // All overwrite checks happen before anything is written
        for (path, _, _) in &files {
            if !self.may_overwrite(path)? {
                println!("{}", style("Aborted.").yellow());
                return Ok(exit_codes::SUCCESS);
            }
        }

        for (path, content, label) in &files {
            std::fs::write(path, content)?;
            if !cli.quiet {
                output::success(&format!(
                    "Created {} at {}",
                    label,
                    style(path.display()).cyan()
                ));
            }
        }

        if !cli.quiet {
            println!();
            println!("Next steps:");
            println!("  1. Edit {} to point at your release tool", config_path.display());
            println!(
                "  2. Run {} to see what a release would contain",
                output::command("release-gate check")
            );
            println!(
                "  3. Run {} to cut the release",
                output::command("release-gate release")
            );
        }

        Ok(exit_codes::SUCCESS)
    }

    /// Whether `path` may be written: free, forced, or confirmed by the user
    fn may_overwrite(&self, path: &Path) -> anyhow::Result<bool> {
        if !path.exists() || self.force {
            return Ok(true);
        }

        if self.yes {
            anyhow::bail!(
                "File already exists at {}. Use --force to overwrite.",
                path.display()
            );
        }

        Ok(Confirm::new()
            .with_prompt(format!("{} already exists. Overwrite?", path.display()))
            .default(false)
            .interact()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use release_gate_core::config::load_config;
    use tempfile::TempDir;

    #[derive(Debug, Parser)]
    struct Wrapper {
        #[command(flatten)]
        cmd: InitCommand,
    }

    fn init(args: &[&str]) -> (Cli, InitCommand) {
        let cli = Cli::parse_from(["release-gate", "-q"]);
        let mut argv = vec!["init"];
        argv.extend_from_slice(args);
        (cli, Wrapper::parse_from(argv).cmd)
    }

    #[test]
    fn test_writes_loadable_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("release-gate.toml");
        let out = path.to_string_lossy().to_string();
        let (cli, cmd) = init(&["-y", "--output", &out]);

        assert_eq!(cmd.execute(&cli).unwrap(), exit_codes::SUCCESS);
        let config = load_config(&path).unwrap();
        assert_eq!(config.tool.program, "npx");
    }

    #[test]
    fn test_writes_versionrc_next_to_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("release-gate.yaml");
        let out = path.to_string_lossy().to_string();
        let (cli, cmd) = init(&["-y", "--yaml", "--versionrc", "--output", &out]);

        cmd.execute(&cli).unwrap();
        assert!(load_config(&path).is_ok());

        let rc: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(temp.path().join(VERSIONRC_FILE)).unwrap(),
        )
        .unwrap();
        assert_eq!(rc["types"][1]["section"], "Bug Fixes");
        assert_eq!(rc["skip"]["tag"], false);
    }

    #[test]
    fn test_refuses_overwrite_with_yes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("release-gate.toml");
        std::fs::write(&path, "# keep me\n").unwrap();
        let out = path.to_string_lossy().to_string();
        let (cli, cmd) = init(&["-y", "--output", &out]);

        assert!(cmd.execute(&cli).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# keep me\n");
    }

    #[test]
    fn test_existing_versionrc_leaves_config_unwritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("release-gate.toml");
        let rc_path = temp.path().join(VERSIONRC_FILE);
        std::fs::write(&rc_path, "{}\n").unwrap();
        let out = path.to_string_lossy().to_string();
        let (cli, cmd) = init(&["-y", "--versionrc", "--output", &out]);

        assert!(cmd.execute(&cli).is_err());
        assert!(!path.exists());
        assert_eq!(std::fs::read_to_string(&rc_path).unwrap(), "{}\n");
    }

    #[test]
    fn test_force_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("release-gate.toml");
        std::fs::write(&path, "# replace me\n").unwrap();
        let out = path.to_string_lossy().to_string();
        let (cli, cmd) = init(&["--force", "--output", &out]);

        cmd.execute(&cli).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[tool]"));
    }
}
