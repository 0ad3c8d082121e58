//! Business logic services
//!
//! - [`resolver`] - Which package manager governs a project, and is it installed
//! - [`classifier`] - Audit exit status to [`Verdict`](crate::core::models::Verdict)
//! - [`auditor`] - Resolve, run, classify

pub mod auditor;
pub mod classifier;
pub mod resolver;

pub use auditor::{AuditOutcome, UNRESOLVED_PACKAGE_MANAGER, run_audit};
pub use classifier::classify;
pub use resolver::{confirm_installed, detect_package_manager, resolve_package_manager};
