//! Local filesystem adapter
//!
//! Implements `FileInspector` against a directory on disk.

use std::path::{Path, PathBuf};

use crate::core::ports::FileInspector;

/// Probes files under a project root on the local filesystem
#[derive(Debug, Clone)]
pub struct LocalFileInspector {
    /// Project root
    root: PathBuf,
}

impl LocalFileInspector {
    /// Create an inspector rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileInspector for LocalFileInspector {
    fn base_path(&self) -> &Path {
        &self.root
    }

    fn exists(&self, relative: &str) -> bool {
        let relative = relative.strip_prefix("./").unwrap_or(relative);
        self.root.join(relative).try_exists().unwrap_or(false)
    }
}
