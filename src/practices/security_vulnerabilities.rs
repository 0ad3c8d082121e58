//! Security vulnerabilities practice
//!
//! Delegates to the project's own package manager: `npm audit` or
//! `yarn audit`, whichever the lock files point at and the host has.

use std::fmt;

use crate::adapters::{PathCommandLocator, ProcessRunner};
use crate::core::models::Verdict;
use crate::core::ports::{CommandLocator, CommandRunner};
use crate::core::services::run_audit;

use super::{Practice, PracticeImpact, PracticeMetadata, ProjectContext};

/// Identifier of this practice
pub const ID: &str = "JavaScript.SecurityVulnerabilities";

static METADATA: PracticeMetadata = PracticeMetadata {
    id: ID,
    name: "Security vulnerabilities detected",
    impact: PracticeImpact::High,
    suggestion: "High-severity vulnerabilities were found in your dependencies. \
                 Run npm audit or yarn audit (or use Snyk) to fix them.",
    report_only_once: true,
    url: "https://snyk.io/",
};

/// Fails when the package manager's audit reports high-severity findings
pub struct SecurityVulnerabilitiesPractice {
    locator: Box<dyn CommandLocator>,
    runner: Box<dyn CommandRunner>,
}

impl SecurityVulnerabilitiesPractice {
    /// Create the practice with explicit host adapters
    #[must_use]
    pub fn new(locator: Box<dyn CommandLocator>, runner: Box<dyn CommandRunner>) -> Self {
        Self { locator, runner }
    }

    /// Create the practice against the real host with the given runner
    #[must_use]
    pub fn on_host(runner: ProcessRunner) -> Self {
        Self::new(Box::new(PathCommandLocator), Box::new(runner))
    }
}

impl Default for SecurityVulnerabilitiesPractice {
    fn default() -> Self {
        Self::on_host(ProcessRunner::default())
    }
}

impl fmt::Debug for SecurityVulnerabilitiesPractice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityVulnerabilitiesPractice").field("id", &ID).finish_non_exhaustive()
    }
}

impl Practice for SecurityVulnerabilitiesPractice {
    fn metadata(&self) -> &PracticeMetadata {
        &METADATA
    }

    fn is_applicable(&self, ctx: &ProjectContext) -> bool {
        ctx.language().uses_node_tooling()
    }

    fn evaluate(&self, ctx: &ProjectContext) -> Verdict {
        run_audit(ctx.files(), self.locator.as_ref(), self.runner.as_ref()).verdict
    }
}
