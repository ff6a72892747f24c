//! Shell completions

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use tracing::info;

use crate::cli::Cli;
use crate::exit_codes;

/// Print a shell completion script to stdout
#[derive(Debug, Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command
    pub fn execute(&self, _cli: &Cli) -> anyhow::Result<i32> {
        info!(shell = %self.shell, "executing completions command");
        self.write(&mut std::io::stdout());
        Ok(exit_codes::SUCCESS)
    }

    fn write(&self, out: &mut dyn std::io::Write) {
        clap_complete::generate(self.shell, &mut Cli::command(), "release-gate", out);
    }
}
