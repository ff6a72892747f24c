//! Release Gate Core - decide whether a release is worth cutting
//!
//! This crate provides configuration, error handling, the changelog heading
//! scanner and the gate that sits in front of an external release tool
//! such as `standard-version`.

pub mod config;
pub mod error;
pub mod gate;
pub mod scan;
pub mod tool;

pub use error::{ConfigError, GateError, Result, ToolError};
pub use gate::{GateAction, GateDecision, GateOutcome, ReleaseGate};
pub use scan::{HeadingScanner, ReleaseScan};
pub use tool::{CommandTool, ReleaseStatus, ReleaseTool};
