//! Job identifiers and status values.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::error::ProgressError;

/// The three report jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobKind {
    /// Account balances report.
    Accounts,
    /// Yearly cash flow report.
    Yearly,
    /// Financial statement report.
    Fs,
}

impl JobKind {
    /// All jobs, in reporting order.
    pub const ALL: [Self; 3] = [Self::Accounts, Self::Yearly, Self::Fs];

    /// Job name used in status queries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accounts => "accounts",
            Self::Yearly => "yearly",
            Self::Fs => "fs",
        }
    }

    /// File name the job writes under the output directory.
    #[must_use]
    pub const fn output_file_name(self) -> &'static str {
        match self {
            Self::Accounts => "accounts.csv",
            Self::Yearly => "yearly.csv",
            Self::Fs => "fs.csv",
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobKind {
    type Err = ProgressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accounts" => Ok(Self::Accounts),
            "yearly" => Ok(Self::Yearly),
            "fs" => Ok(Self::Fs),
            _ => Err(ProgressError::UnknownJob(s.to_string())),
        }
    }
}

/// Lifecycle state of a job.
///
/// There is no failure state: a job that fails after starting stays
/// `Starting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JobStatus {
    /// Not started since the process began.
    #[default]
    Idle,
    /// Running.
    Starting,
    /// Completed, with elapsed wall time.
    Finished {
        /// Time from job entry to job exit.
        duration: Duration,
    },
}

impl JobStatus {
    /// Returns true once the job has completed.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }

    /// Elapsed time of a finished job.
    #[must_use]
    pub const fn duration(&self) -> Option<Duration> {
        match self {
            Self::Finished { duration } => Some(*duration),
            _ => None,
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Starting => f.write_str("starting"),
            Self::Finished { duration } => write!(
                f,
                "finished in {}.{:03}s",
                duration.as_secs(),
                duration.subsec_millis()
            ),
        }
    }
}
