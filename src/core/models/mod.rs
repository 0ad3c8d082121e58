//! Domain models for depwarden
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`PackageManager`] - The tool that owns a project's dependency tree
//! - [`AuditCommand`] - The exact audit command line for a package manager
//! - [`AuditInvocation`] - What was run, where, and how it exited
//! - [`Verdict`] - Tri-state outcome of a practice evaluation
//! - [`Language`] - Declared source language of a project

mod invocation;
mod language;
mod package_manager;
mod verdict;

pub use invocation::{AuditCommand, AuditInvocation};
pub use language::Language;
pub use package_manager::PackageManager;
pub use verdict::Verdict;
