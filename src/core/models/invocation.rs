//! Audit command lines and invocation records

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::PackageManager;

/// A program plus its arguments, executed without a shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditCommand {
    program: String,
    args: Vec<String>,
}

impl AuditCommand {
    /// Create a command from a program name and its arguments
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// The executable to launch
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the executable
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for AuditCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Record of one audit run
///
/// Lives only for the duration of an evaluation. The audit report itself is
/// never captured, only the exit status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditInvocation {
    /// Package manager whose audit was run
    pub package_manager: PackageManager,
    /// The command that was executed
    pub command: AuditCommand,
    /// Directory the command ran in
    pub working_dir: PathBuf,
    /// Process exit status
    pub exit_code: i32,
}
