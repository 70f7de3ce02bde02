use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Every language of every job went through (or was skipped)
/// - `Failure` (1): The job ran but at least one language failed
/// - `Error` (2): The job could not run (config error, unreachable server, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
