//! Evaluation context handed to practices

use std::fmt;
use std::path::Path;

use crate::core::models::Language;
use crate::core::ports::FileInspector;

/// A project as seen by a practice
///
/// Read-only: practices never mutate the context.
pub struct ProjectContext {
    language: Language,
    files: Box<dyn FileInspector>,
}

impl ProjectContext {
    /// Create a context for a project in `language`
    #[must_use]
    pub fn new(language: Language, files: Box<dyn FileInspector>) -> Self {
        Self { language, files }
    }

    /// Create a context, detecting the language from marker files
    #[must_use]
    pub fn detect(files: Box<dyn FileInspector>) -> Self {
        let language = Language::detect(files.as_ref());
        Self::new(language, files)
    }

    /// The project's source language
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// The project root
    #[must_use]
    pub fn root(&self) -> &Path {
        self.files.base_path()
    }

    /// File probing under the project root
    #[must_use]
    pub fn files(&self) -> &dyn FileInspector {
        self.files.as_ref()
    }
}

impl fmt::Debug for ProjectContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectContext")
            .field("language", &self.language)
            .field("root", &self.root())
            .finish()
    }
}
