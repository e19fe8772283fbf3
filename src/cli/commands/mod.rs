pub mod check;
pub mod init;

pub use check::AuditReport;

/// Summary of `init`.
#[derive(Debug)]
pub struct InitSummary {
    pub config_path: String,
}

/// Result of running a locale-audit command.
#[derive(Debug)]
pub enum CommandResult {
    Check(Box<AuditReport>),
    Init(InitSummary),
}
