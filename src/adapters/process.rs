//! Process execution adapter
//!
//! Runs audit commands as child processes. The working directory is handed
//! to the child; the current process never changes its own directory, so
//! concurrent audits of different projects cannot interfere.

use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::core::models::AuditCommand;
use crate::core::ports::{CommandRunner, RunError};

/// Default time budget for one audit run
///
/// Expiry kills the direct child only. Processes it started itself, such as
/// a node process behind an `npm` wrapper script, are not signalled and may
/// outlive the audit.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Interval between child status polls while a timeout is armed
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs commands silently and reports their exit status
#[derive(Debug, Clone, Copy)]
pub struct ProcessRunner {
    /// Kill the child after this long (`None` = wait forever)
    timeout: Option<Duration>,
}

impl ProcessRunner {
    /// Create a runner with an optional timeout
    #[must_use]
    pub const fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    /// The configured timeout
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn wait(&self, child: &mut Child, command: &AuditCommand) -> Result<ExitStatus, RunError> {
        let Some(timeout) = self.timeout else {
            return child.wait().map_err(|source| wait_error(command, source));
        };

        let deadline = Instant::now() + timeout;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) => {},
                Err(source) => {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(wait_error(command, source));
                },
            }
            if Instant::now() >= deadline {
                // The child may exit between the poll and the kill; either way it gets reaped.
                let _ = child.kill();
                let _ = child.wait();
                return Err(RunError::TimedOut {
                    command: command.to_string(),
                    timeout,
                });
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(Some(DEFAULT_TIMEOUT))
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, command: &AuditCommand, working_dir: &Path) -> Result<i32, RunError> {
        // Resolve through PATH (and PATHEXT) first so `npm.cmd` launches on Windows.
        let program = which::which(command.program())
            .unwrap_or_else(|_| command.program().into());

        let mut child = Command::new(program)
            .args(command.args())
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| spawn_error(command, source))?;

        let status = self.wait(&mut child, command)?;
        status.code().ok_or_else(|| RunError::Terminated {
            command: command.to_string(),
        })
    }
}

fn spawn_error(command: &AuditCommand, source: std::io::Error) -> RunError {
    RunError::Spawn {
        command: command.to_string(),
        source,
    }
}

fn wait_error(command: &AuditCommand, source: std::io::Error) -> RunError {
    RunError::Wait {
        command: command.to_string(),
        source,
    }
}
