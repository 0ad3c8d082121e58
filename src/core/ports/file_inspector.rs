//! Project filesystem port
//!
//! Defines the interface for probing files under a project root.

use std::path::Path;

/// Read-only view of a project's files
pub trait FileInspector: Send + Sync {
    /// The project root all relative paths are resolved against
    fn base_path(&self) -> &Path;

    /// Check whether `relative` exists under the project root
    ///
    /// Paths may carry a leading `./`. Any I/O failure reads as "absent".
    fn exists(&self, relative: &str) -> bool;
}
