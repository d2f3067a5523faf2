use std::process::ExitCode;

/// Exit status of a check run.
///
/// - `Success` (0): the run completed. Reported problems alone do not change
///   this unless `--strict-exit` is given.
/// - `Failure` (1): `--strict-exit` was given and problems were reported.
/// - `Error` (2): the run could not be performed (e.g. invalid config file).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for a completed run that reported `issue_count` problems.
    pub fn from_issue_count(issue_count: usize, strict: bool) -> Self {
        if strict && issue_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
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
