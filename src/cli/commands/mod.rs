pub mod init;
pub mod translate;

use std::path::PathBuf;

use super::exit_status::ExitStatus;
use crate::scanner::ScanSummary;

#[derive(Debug)]
pub enum CommandSummary {
    Translate(TranslateSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct TranslateSummary {
    /// The configured components root, for the not-found message.
    pub configured_root: String,
    /// The directory actually scanned; `None` when no candidate existed.
    pub resolved_root: Option<PathBuf>,
    pub scan: ScanSummary,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a hanloc command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}
