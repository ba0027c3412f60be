use std::process::ExitCode;

use super::commands::CommandResult;

/// Process exit status of the `apiconsole` binary.
///
/// - `Success` (0): the command ran and found nothing to report
/// - `Failure` (1): the command ran and found problems
/// - `Error` (2): the command could not run (bad config, unreadable input)
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

/// Failure only for commands that gate on errors and found some.
pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.exit_on_errors && result.error_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
