//! External release tool invocation
//!
//! The release tool is run twice at most: once in dry-run mode with its
//! output captured, and once for real with the standard streams inherited.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use crate::config::ToolConfig;
use crate::error::{Result, ToolError};

/// Exit status of the real release run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseStatus {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
}

impl ReleaseStatus {
    /// Whether the release tool exited successfully
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit code to propagate from this process
    pub fn exit_code(&self) -> i32 {
        self.code.unwrap_or(1)
    }
}

impl From<std::process::ExitStatus> for ReleaseStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// A changelog/release tool the gate can drive
pub trait ReleaseTool {
    /// Human-readable command line, for messages
    fn describe(&self, dry_run: bool) -> String;

    /// Run without persisting changes and return the combined output
    fn dry_run(&self) -> Result<String>;

    /// Run for real, letting the tool write directly to the console
    fn release(&self) -> Result<ReleaseStatus>;
}

/// Runs the release tool as a child process
#[derive(Debug, Clone)]
pub struct CommandTool {
    config: ToolConfig,
}

impl CommandTool {
    /// Create a tool runner from configuration
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Resolve the program on `PATH`, if it can be found there.
    ///
    /// Goes through `PATHEXT` on Windows, so `npx` finds `npx.cmd`. Relative
    /// paths resolve against the configured working directory.
    pub fn resolve_program(&self) -> Option<PathBuf> {
        match &self.config.working_dir {
            Some(dir) => {
                which::which_in(&self.config.program, std::env::var_os("PATH"), dir).ok()
            }
            None => which::which(&self.config.program).ok(),
        }
    }

    fn command(&self, dry_run: bool) -> Command {
        let program = match self.resolve_program() {
            Some(path) => {
                debug!(program = %self.config.program, path = %path.display(), "resolved program");
                path
            }
            None => PathBuf::from(&self.config.program),
        };

        let mut cmd = Command::new(program);
        cmd.args(&self.config.args);
        if dry_run && !self.config.dry_run_flag.is_empty() {
            cmd.arg(&self.config.dry_run_flag);
        }
        if let Some(dir) = &self.config.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn spawn_error(&self, dry_run: bool, source: std::io::Error) -> ToolError {
        if self.resolve_program().is_none() {
            warn!(program = %self.config.program, "program not found on PATH");
        }
        ToolError::Spawn {
            command: self.describe(dry_run),
            source,
        }
    }
}

impl ReleaseTool for CommandTool {
    fn describe(&self, dry_run: bool) -> String {
        self.config.display_command(dry_run)
    }

    fn dry_run(&self) -> Result<String> {
        let command = self.describe(true);
        info!(command = %command, "running release tool dry run");

        let output = self
            .command(true)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| self.spawn_error(true, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!(
            status = ?output.status.code(),
            stdout_len = stdout.len(),
            stderr_len = stderr.len(),
            "dry run finished"
        );

        match output.status.code() {
            Some(0) => Ok(format!("{}{}", stdout, stderr)),
            Some(code) => Err(ToolError::Failed {
                command,
                code,
                stderr: stderr.trim_end().to_string(),
            }
            .into()),
            None => Err(ToolError::Signal(command).into()),
        }
    }

    fn release(&self) -> Result<ReleaseStatus> {
        info!(command = %self.describe(false), "running release tool");

        let status = self
            .command(false)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| self.spawn_error(false, e))?;

        debug!(status = ?status.code(), "release tool finished");
        Ok(status.into())
    }
}
