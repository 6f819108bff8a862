use std::process::ExitCode;

/// Exit status of a locount command.
///
/// - `Success` (0): the command finished; for `qa`, no issues were found
/// - `Failure` (1): `qa` found issues, or `init` found an existing config
/// - `Error` (2): the command could not run (bad config, unreadable input, etc.)
///
/// Per-file problems during `count` and failed spreadsheet exports are
/// reported as notices and never change the status.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_issue_count(count: usize) -> Self {
        if count == 0 {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
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
