use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// A program plus its ordered argument list, ready to hand to a launcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Full argument vector, program first.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// How a launched child terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatusInfo {
    pub success: bool,
    /// `None` when the child was terminated by a signal.
    pub code: Option<i32>,
}

impl ExitStatusInfo {
    #[cfg(test)]
    pub fn from_code(code: i32) -> Self {
        Self {
            success: code == 0,
            code: Some(code),
        }
    }
}

impl From<std::process::ExitStatus> for ExitStatusInfo {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            success: status.success(),
            code: status.code(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureCause {
    /// The child ran and exited unsuccessfully.
    Exited { code: Option<i32> },
    /// The interpreter could not be started.
    LaunchFailed { reason: String },
}

/// Terminal state of a single run. There are exactly two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunOutcome {
    Succeeded,
    Failed { cause: FailureCause },
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Succeeded)
    }

    /// Exit code reported by the child, if it got far enough to have one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            RunOutcome::Succeeded => Some(0),
            RunOutcome::Failed {
                cause: FailureCause::Exited { code },
            } => *code,
            RunOutcome::Failed {
                cause: FailureCause::LaunchFailed { .. },
            } => None,
        }
    }

    /// Process exit code for this tool itself.
    pub fn process_exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// What the invoker hands back after a run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub invocation: Invocation,
    pub outcome: RunOutcome,
    pub elapsed: Duration,
}

/// Persisted summary of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    #[serde(default)]
    pub timestamp_utc: String,
    pub command: Vec<String>,
    pub input_document: String,
    pub output_document: String,
    pub results_dir: String,
    pub outcome: RunOutcome,
    #[serde(default)]
    pub exit_code: Option<i32>,
    #[serde(with = "humantime_serde")]
    pub elapsed: Duration,
    #[serde(default)]
    pub tool_version: Option<String>,
}

impl RunRecord {
    /// One-line description used by `--history`.
    pub fn to_summary_line(&self) -> String {
        let status = match &self.outcome {
            RunOutcome::Succeeded => "ok".to_string(),
            RunOutcome::Failed {
                cause: FailureCause::Exited { code: Some(code) },
            } => format!("failed (exit {code})"),
            RunOutcome::Failed {
                cause: FailureCause::Exited { code: None },
            } => "failed (terminated by signal)".to_string(),
            RunOutcome::Failed {
                cause: FailureCause::LaunchFailed { reason },
            } => format!("failed to launch ({reason})"),
        };
        format!(
            "{}  {:<8}  {}  {}",
            self.timestamp_utc,
            humantime::format_duration(Duration::from_secs(self.elapsed.as_secs())).to_string(),
            self.input_document,
            status
        )
    }
}
