//! Exit codes for the CLI

use release_gate_core::GateError;

/// Success, or nothing to release
pub const SUCCESS: i32 = 0;

/// General error, including a failed dry run
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// `check --strict` found nothing release-worthy
pub const NOTHING_TO_RELEASE: i32 = 3;

/// Map an error that escaped a command to an exit code
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<GateError>() {
        Some(e) if e.is_config() => CONFIG_ERROR,
        _ => ERROR,
    }
}
