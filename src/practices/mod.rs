//! Practices and their registry
//!
//! A practice is a named, self-describing check that inspects one project and
//! yields a [`Verdict`]. Practices are registered explicitly into a
//! [`PracticeRegistry`]; the binary installs one registry as the process-wide
//! catalog at startup.
//!
//! - [`metadata`] - Identity, impact and guidance attached to a practice
//! - [`context`] - What a practice gets to look at
//! - [`registry`] - Registration and lookup
//! - [`security_vulnerabilities`] - Dependency audit via npm or yarn

pub mod context;
pub mod metadata;
pub mod registry;
pub mod security_vulnerabilities;

pub use context::ProjectContext;
pub use metadata::{PracticeImpact, PracticeMetadata};
pub use registry::{Evaluation, PracticeRegistry, RegistryError};
pub use security_vulnerabilities::SecurityVulnerabilitiesPractice;

use crate::core::models::Verdict;

/// A check that can be evaluated against a project
pub trait Practice: Send + Sync {
    /// Static description of the practice
    fn metadata(&self) -> &PracticeMetadata;

    /// Whether this practice means anything for the given project
    fn is_applicable(&self, ctx: &ProjectContext) -> bool;

    /// Evaluate the practice
    ///
    /// Never fails: anything that prevents a real answer is [`Verdict::Unknown`].
    fn evaluate(&self, ctx: &ProjectContext) -> Verdict;
}
