//! CLI commands

mod check;
mod completions;
mod init;
mod release;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use release::ReleaseCommand;
