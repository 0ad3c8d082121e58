//! Process execution port
//!
//! Defines the interface for running an audit command inside a project.

use std::path::Path;
use std::time::Duration;

use thiserror::Error;

use crate::core::models::AuditCommand;

/// Reasons a command produced no exit status
#[derive(Debug, Error)]
pub enum RunError {
    /// The process could not be launched at all
    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        /// Command line that was attempted
        command: String,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// The process started but its status could not be collected
    #[error("failed to wait for `{command}`: {source}")]
    Wait {
        /// Command line that was running
        command: String,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// The process outlived its time budget and was killed
    #[error("`{command}` did not finish within {timeout:?}")]
    TimedOut {
        /// Command line that was running
        command: String,
        /// Budget that was exceeded
        timeout: Duration,
    },

    /// The process ended without an exit code (killed by a signal)
    #[error("`{command}` was terminated without an exit status")]
    Terminated {
        /// Command line that was running
        command: String,
    },
}

/// Executes commands and reports their exit status
///
/// Output is never surfaced to the caller.
pub trait CommandRunner: Send + Sync {
    /// Run `command` with `working_dir` as its working directory
    ///
    /// The caller's own working directory must be left untouched.
    fn run(&self, command: &AuditCommand, working_dir: &Path) -> Result<i32, RunError>;
}
