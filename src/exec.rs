//! Runs an accepted command in a shell attached to the user's terminal.
//!
//! No sandboxing or validation happens here; the user's explicit `run`
//! choice is the only gate.

use crate::config::ExecConfig;
use crate::error::ExecError;
use async_trait::async_trait;
use std::fmt;
use std::process::Stdio;
use tokio::process::Command;

/// Result of one finished command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOutcome {
    pub succeeded: bool,
    /// Exit code, or `None` when the process was killed by a signal.
    pub exit_status: Option<i32>,
}

impl ExecOutcome {
    pub fn from_status(status: std::process::ExitStatus) -> Self {
        Self {
            succeeded: status.success(),
            exit_status: status.code(),
        }
    }
}

impl fmt::Display for ExecOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exit_status {
            Some(code) => write!(f, "exit status {code}"),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// Shell execution seam used by the session.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(&self, command: &str) -> Result<ExecOutcome, ExecError>;
}

/// Runs commands as `<shell> -c <command>` with inherited stdio.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: String,
}

impl ShellExecutor {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    pub fn from_config(config: &ExecConfig) -> Self {
        Self::new(config.shell.clone())
    }
}

#[async_trait]
impl Executor for ShellExecutor {
    async fn execute(&self, command: &str) -> Result<ExecOutcome, ExecError> {
        tracing::info!(shell = %self.shell, command, "running command");
        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| ExecError::Spawn {
                shell: self.shell.clone(),
                source,
            })?;
        let outcome = ExecOutcome::from_status(status);
        tracing::info!(succeeded = outcome.succeeded, status = ?outcome.exit_status, "command finished");
        Ok(outcome)
    }
}
