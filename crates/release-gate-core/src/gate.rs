//! Release gate
//!
//! Decides whether a release should be cut by dry-running the release tool
//! and looking for release-worthy changelog sections in its output:
//!
//! - headings found: release
//! - nothing found, force flag set: release anyway
//! - nothing found, no force flag: skip
//!
//! A failing dry run is an error and never leads to a release.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::scan::{HeadingScanner, ReleaseScan};
use crate::tool::{ReleaseStatus, ReleaseTool};

/// What the gate decided to do after the dry run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateAction {
    /// No release-worthy content; do nothing
    Skip,
    /// Release-worthy content found
    Release,
    /// No release-worthy content, released because of the force flag
    ForcedRelease,
}

impl GateAction {
    /// Whether the mutating release run should happen
    pub fn releases(&self) -> bool {
        !matches!(self, Self::Skip)
    }
}

/// Result of evaluating a dry run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateDecision {
    /// The chosen action
    pub action: GateAction,
    /// What the dry run contained
    pub scan: ReleaseScan,
}

impl GateDecision {
    /// Decide from a scan and the force flag
    pub fn from_scan(scan: ReleaseScan, force: bool) -> Self {
        let action = if scan.has_release_content() {
            GateAction::Release
        } else if force {
            GateAction::ForcedRelease
        } else {
            GateAction::Skip
        };
        Self { action, scan }
    }
}

/// Final outcome of a gate run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Nothing to release; the release tool was not run for real
    Skipped { scan: ReleaseScan },
    /// The release tool ran for real
    Released {
        scan: ReleaseScan,
        forced: bool,
        status: ReleaseStatus,
    },
}

impl GateOutcome {
    /// Exit code this process should end with
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Skipped { .. } => 0,
            Self::Released { status, .. } => status.exit_code(),
        }
    }
}

/// Gate in front of a release tool
pub struct ReleaseGate<'a, T: ReleaseTool> {
    tool: &'a T,
    scanner: HeadingScanner,
}

impl<'a, T: ReleaseTool> ReleaseGate<'a, T> {
    /// Create a gate using the default release-worthy headings
    pub fn new(tool: &'a T) -> Self {
        Self {
            tool,
            scanner: HeadingScanner::default(),
        }
    }

    /// Use a custom heading scanner
    pub fn with_scanner(mut self, scanner: HeadingScanner) -> Self {
        self.scanner = scanner;
        self
    }

    /// Dry-run the tool and scan its output
    pub fn check(&self) -> Result<ReleaseScan> {
        let output = self.tool.dry_run()?;
        let scan = self.scanner.scan(&output);
        debug!(sections = ?scan.sections, "dry run scanned");
        Ok(scan)
    }

    /// Dry-run the tool and decide whether to release
    pub fn evaluate(&self, force: bool) -> Result<GateDecision> {
        let decision = GateDecision::from_scan(self.check()?, force);
        info!(action = ?decision.action, force, "gate evaluated");
        Ok(decision)
    }

    /// Carry out a decision; only non-skip decisions touch the tool
    pub fn execute(&self, decision: GateDecision) -> Result<GateOutcome> {
        match decision.action {
            GateAction::Skip => Ok(GateOutcome::Skipped {
                scan: decision.scan,
            }),
            action => {
                let status = self.tool.release()?;
                info!(code = ?status.code, "release finished");
                Ok(GateOutcome::Released {
                    scan: decision.scan,
                    forced: action == GateAction::ForcedRelease,
                    status,
                })
            }
        }
    }

    /// Evaluate and execute in one step
    pub fn run(&self, force: bool) -> Result<GateOutcome> {
        let decision = self.evaluate(force)?;
        self.execute(decision)
    }
}
