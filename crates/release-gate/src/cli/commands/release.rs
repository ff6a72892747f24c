//! Release command

use clap::Args;
use tracing::{error, info};

use release_gate_core::{
    CommandTool, GateAction, GateOutcome, HeadingScanner, ReleaseGate, ReleaseTool,
};

use crate::cli::output;
use crate::cli::{Cli, OutputFormat};
use crate::exit_codes;

/// Run the release tool when the dry run finds release-worthy commits
#[derive(Debug, Default, Args)]
pub struct ReleaseCommand {}

impl ReleaseCommand {
    /// Execute the release command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        info!(force = cli.ignore_empty, "executing release command");
        let (config, config_path) = cli.load_config()?;

        if config_path.is_none() && cli.verbose && cli.show_text() {
            output::warning("No configuration found, using defaults.");
        }

        let scanner = HeadingScanner::from_config(&config.gate)?;
        let tool = CommandTool::new(config.tool.clone());
        run_gate(cli, &tool, scanner)
    }
}

/// Drive the gate against a release tool and report progress
pub(crate) fn run_gate<T: ReleaseTool>(
    cli: &Cli,
    tool: &T,
    scanner: HeadingScanner,
) -> anyhow::Result<i32> {
    let gate = ReleaseGate::new(tool).with_scanner(scanner);

    if cli.show_text() {
        println!("Checking for release-worthy commits...");
    }

    let decision = match gate.evaluate(cli.ignore_empty) {
        Ok(decision) => decision,
        Err(e) => {
            error!(error = %e, "dry run failed");
            output::error(&format!("Error creating release: {}", e));
            return Ok(exit_codes::ERROR);
        }
    };

    if cli.show_text() {
        match decision.action {
            GateAction::Skip => {
                println!("No release-worthy commits found. Skipping version bump.");
            }
            GateAction::ForcedRelease => {
                println!("Forcing release despite no changelog content (--ignore-empty)...");
            }
            GateAction::Release => {
                if cli.verbose {
                    let sections: Vec<String> = decision
                        .scan
                        .sections
                        .iter()
                        .map(|s| output::section(s))
                        .collect();
                    println!("{}", output::key_value("Sections", &sections.join(", ")));
                }
                println!("Commits detected proceeding with creation of new release...");
            }
        }
    }

    let action = decision.action;
    let outcome = gate.execute(decision)?;
    let code = outcome.exit_code();

    // stdout belongs to the release tool once it has run
    if cli.format == OutputFormat::Json {
        eprintln!("{}", serde_json::to_string_pretty(&release_report(action, &outcome))?);
    }

    Ok(code)
}

/// JSON report written to stderr by `release --format json`
fn release_report(action: GateAction, outcome: &GateOutcome) -> serde_json::Value {
    let sections = match outcome {
        GateOutcome::Skipped { scan } | GateOutcome::Released { scan, .. } => &scan.sections,
    };
    serde_json::json!({
        "action": action,
        "sections": sections,
        "released": action.releases(),
        "exit_code": outcome.exit_code(),
    })
}
