//! Check command

use clap::Args;
use tracing::info;

use release_gate_core::{CommandTool, HeadingScanner, ReleaseGate, ReleaseScan, ReleaseTool};

use crate::cli::output;
use crate::cli::{Cli, OutputFormat};
use crate::exit_codes;

/// Dry-run the release tool and report what it would release
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Exit with a non-zero status when nothing is release-worthy
    #[arg(long)]
    pub strict: bool,
}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        info!(strict = self.strict, "executing check command");
        let (config, config_path) = cli.load_config()?;

        let scanner = HeadingScanner::from_config(&config.gate)?;
        let tool = CommandTool::new(config.tool.clone());

        if cli.show_text() {
            println!("{}", output::header("Release Check"));
            println!();
            let source = config_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "defaults".to_string());
            println!("{}", output::key_value("Config", &source));
            println!(
                "{}",
                output::key_value("Command", &output::command(&tool.describe(true)))
            );
            println!("{}", output::key_value("Pattern", scanner.pattern()));
            if tool.resolve_program().is_none() {
                output::warning(&format!("'{}' was not found on PATH", config.tool.program));
            }
            println!();
        }

        self.run(cli, &tool, scanner)
    }

    /// Dry-run a release tool, print the report and pick the exit code
    pub(crate) fn run<T: ReleaseTool>(
        &self,
        cli: &Cli,
        tool: &T,
        scanner: HeadingScanner,
    ) -> anyhow::Result<i32> {
        let scan = ReleaseGate::new(tool).with_scanner(scanner).check()?;

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&check_report(&scan))?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    if scan.has_release_content() {
                        let sections: Vec<String> =
                            scan.sections.iter().map(|s| output::section(s)).collect();
                        output::success(&format!(
                            "Release-worthy sections: {}",
                            sections.join(", ")
                        ));
                    } else {
                        output::info("No release-worthy commits found.");
                    }
                }
            }
        }

        Ok(self.exit_code(&scan))
    }

    fn exit_code(&self, scan: &ReleaseScan) -> i32 {
        if self.strict && !scan.has_release_content() {
            exit_codes::NOTHING_TO_RELEASE
        } else {
            exit_codes::SUCCESS
        }
    }
}

/// JSON report printed by `check --format json`
fn check_report(scan: &ReleaseScan) -> serde_json::Value {
    serde_json::json!({
        "release_worthy": scan.has_release_content(),
        "sections": scan.sections,
    })
}
