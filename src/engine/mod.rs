pub mod nbconvert;

use crate::error::LaunchError;
use crate::model::{ExitStatusInfo, Invocation};
use std::process::{Command, Stdio};

/// Starts a child process and blocks until it exits.
pub trait ProcessLauncher {
    fn launch(&mut self, invocation: &Invocation) -> Result<ExitStatusInfo, LaunchError>;
}

/// Launches through the OS with inherited stdio and no timeout.
#[derive(Debug, Default)]
pub struct SystemLauncher {
    /// Point the child's stdout at our stderr, keeping our stdout free for JSON.
    pub stdout_to_stderr: bool,
}

impl SystemLauncher {
    pub fn for_json() -> Self {
        Self {
            stdout_to_stderr: true,
        }
    }
}

impl ProcessLauncher for SystemLauncher {
    fn launch(&mut self, invocation: &Invocation) -> Result<ExitStatusInfo, LaunchError> {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if self.stdout_to_stderr {
            cmd.stdout(Stdio::from(std::io::stderr()));
        }
        let status = cmd.status().map_err(|source| LaunchError::Spawn {
            program: invocation.program.clone(),
            source,
        })?;
        Ok(ExitStatusInfo::from(status))
    }
}

/// Launcher that records calls and replays a fixed result.
#[cfg(test)]
pub(crate) struct ScriptedLauncher {
    exit_code: Option<i32>,
    pub calls: Vec<Invocation>,
}

#[cfg(test)]
impl ScriptedLauncher {
    pub fn exiting(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            calls: Vec::new(),
        }
    }

    /// Behaves like an interpreter that is not on `PATH`.
    pub fn missing() -> Self {
        Self {
            exit_code: None,
            calls: Vec::new(),
        }
    }
}

#[cfg(test)]
impl ProcessLauncher for ScriptedLauncher {
    fn launch(&mut self, invocation: &Invocation) -> Result<ExitStatusInfo, LaunchError> {
        self.calls.push(invocation.clone());
        match self.exit_code {
            Some(code) => Ok(ExitStatusInfo::from_code(code)),
            None => Err(LaunchError::Spawn {
                program: invocation.program.clone(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        }
    }
}
