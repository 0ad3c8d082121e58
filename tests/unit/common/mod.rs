//! Mock implementations of port traits for testing
//!
//! These mocks provide configurable behavior for unit testing
//! without touching the filesystem, PATH, or spawning processes.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use depwarden::core::models::AuditCommand;
use depwarden::core::ports::{CommandLocator, CommandRunner, FileInspector, RunError};

/// Root every mock project pretends to live at
pub const ROOT: &str = "/projects/web";

/// Mock project filesystem holding a fixed set of files
pub struct MockFiles {
    root: PathBuf,
    present: HashSet<String>,
    probes: Mutex<Vec<String>>,
}

impl MockFiles {
    pub fn new(present: &[&str]) -> Self {
        Self {
            root: PathBuf::from(ROOT),
            present: present.iter().map(|p| (*p).to_string()).collect(),
            probes: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self::new(&[])
    }

    /// Paths asked about, in order, exactly as the caller spelled them
    pub fn probes(&self) -> Vec<String> {
        self.probes.lock().unwrap().clone()
    }
}

impl FileInspector for MockFiles {
    fn base_path(&self) -> &Path {
        &self.root
    }

    fn exists(&self, relative: &str) -> bool {
        self.probes.lock().unwrap().push(relative.to_string());
        self.present.contains(relative.trim_start_matches("./"))
    }
}

/// Mock host with a fixed set of installed executables
pub struct MockHost {
    installed: HashSet<String>,
}

impl MockHost {
    pub fn with(installed: &[&str]) -> Self {
        Self {
            installed: installed.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    pub fn bare() -> Self {
        Self::with(&[])
    }
}

impl CommandLocator for MockHost {
    fn is_available(&self, program: &str) -> bool {
        self.installed.contains(program)
    }
}

/// What the mock runner does when asked to run something
#[derive(Debug, Clone, Copy)]
pub enum Outcome {
    Exit(i32),
    SpawnFails,
    WaitFails,
    TimesOut,
    Killed,
}

/// One recorded call to the mock runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub command: String,
    pub working_dir: PathBuf,
}

/// Mock runner that records calls and returns a canned outcome
///
/// Clones share the call log, so a clone can be kept for assertions after
/// the original is boxed into a practice.
#[derive(Clone)]
pub struct RecordingRunner {
    outcome: Outcome,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingRunner {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn exiting(code: i32) -> Self {
        Self::new(Outcome::Exit(code))
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &AuditCommand, working_dir: &Path) -> Result<i32, RunError> {
        self.calls.lock().unwrap().push(RecordedCall {
            command: command.to_string(),
            working_dir: working_dir.to_path_buf(),
        });

        match self.outcome {
            Outcome::Exit(code) => Ok(code),
            Outcome::SpawnFails => Err(RunError::Spawn {
                command: command.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            }),
            Outcome::WaitFails => Err(RunError::Wait {
                command: command.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Interrupted, "interrupted"),
            }),
            Outcome::TimesOut => Err(RunError::TimedOut {
                command: command.to_string(),
                timeout: Duration::from_secs(1),
            }),
            Outcome::Killed => Err(RunError::Terminated {
                command: command.to_string(),
            }),
        }
    }
}
