use std::process::ExitCode;

/// Exit status of the CLI.
///
/// Findings never change the exit status: an audit that completes exits
/// with `Success` whatever it reported. `Error` is reserved for runs that
/// could not start, such as an invalid config file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command ran to completion.
    Success,
    /// Command failed before producing a report (config error, bad arguments).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
