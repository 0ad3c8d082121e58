//! Audit orchestration
//!
//! Single pass, no retries:
//! resolve package manager, run its audit in the project root, classify the
//! exit status. Every failure along the way degrades to [`Verdict::Unknown`].

use crate::core::models::{AuditInvocation, Verdict};
use crate::core::ports::{CommandLocator, CommandRunner, FileInspector};

use super::{classify, resolve_package_manager};

/// Log target for the "cannot establish package manager" diagnostic
pub const LOG_TARGET: &str = "depwarden::security_vulnerabilities";

/// Diagnostic emitted when no usable package manager was found
pub const UNRESOLVED_PACKAGE_MANAGER: &str = "Cannot establish package manager: no package-lock.json, \
     npm-shrinkwrap.json or yarn.lock found, or the matching executable is not installed";

/// Result of one audit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditOutcome {
    /// The classified result
    pub verdict: Verdict,
    /// What was executed, if an exit status was obtained
    pub invocation: Option<AuditInvocation>,
}

impl AuditOutcome {
    const fn unknown() -> Self {
        Self {
            verdict: Verdict::Unknown,
            invocation: None,
        }
    }
}

/// Audit the project rooted at `files.base_path()`
///
/// Read-only with respect to the project: only the audit subcommand is run,
/// nothing is installed and no lock file is touched.
#[must_use]
pub fn run_audit(
    files: &dyn FileInspector,
    locator: &dyn CommandLocator,
    runner: &dyn CommandRunner,
) -> AuditOutcome {
    let Some(package_manager) = resolve_package_manager(files, locator) else {
        log::debug!(target: LOG_TARGET, "{UNRESOLVED_PACKAGE_MANAGER}");
        return AuditOutcome::unknown();
    };

    let command = package_manager.audit_command();
    let working_dir = files.base_path().to_path_buf();
    log::debug!("running `{command}` in {}", working_dir.display());

    let exit_code = match runner.run(&command, &working_dir) {
        Ok(code) => code,
        Err(e) => {
            log::warn!("{e}; dependency audit result is unknown");
            return AuditOutcome::unknown();
        },
    };

    let verdict = classify(package_manager, exit_code);
    log::debug!("`{command}` exited with {exit_code}: {verdict}");

    AuditOutcome {
        verdict,
        invocation: Some(AuditInvocation {
            package_manager,
            command,
            working_dir,
            exit_code,
        }),
    }
}
