//! Project source languages
//!
//! Used as the applicability gate for practices. Detection is a best-effort
//! guess from well-known manifest files.

use serde::{Deserialize, Serialize};

use crate::core::ports::FileInspector;

/// Declared or detected source language of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// JavaScript
    JavaScript,
    /// TypeScript
    TypeScript,
    /// Rust
    Rust,
    /// Python
    Python,
    /// Go
    Go,
    /// Java
    Java,
    /// PHP
    Php,
    /// Ruby
    Ruby,
    /// Could not be determined
    #[default]
    Unknown,
}

/// Marker files checked in order; the first hit decides.
///
/// `tsconfig.json` must come before `package.json`, TypeScript projects carry both.
const MARKERS: &[(&str, Language)] = &[
    ("tsconfig.json", Language::TypeScript),
    ("package.json", Language::JavaScript),
    ("Cargo.toml", Language::Rust),
    ("go.mod", Language::Go),
    ("pyproject.toml", Language::Python),
    ("requirements.txt", Language::Python),
    ("setup.py", Language::Python),
    ("pom.xml", Language::Java),
    ("build.gradle", Language::Java),
    ("build.gradle.kts", Language::Java),
    ("composer.json", Language::Php),
    ("Gemfile", Language::Ruby),
];

impl Language {
    /// Guess the language from marker files under the inspector's root
    #[must_use]
    pub fn detect(files: &dyn FileInspector) -> Self {
        MARKERS
            .iter()
            .find(|(marker, _)| files.exists(marker))
            .map_or(Self::Unknown, |&(_, language)| language)
    }

    /// Whether projects in this language are managed with npm or yarn
    #[must_use]
    pub const fn uses_node_tooling(self) -> bool {
        matches!(self, Self::JavaScript | Self::TypeScript)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Rust => "Rust",
            Self::Python => "Python",
            Self::Go => "Go",
            Self::Java => "Java",
            Self::Php => "PHP",
            Self::Ruby => "Ruby",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "javascript" | "js" => Ok(Self::JavaScript),
            "typescript" | "ts" => Ok(Self::TypeScript),
            "rust" => Ok(Self::Rust),
            "python" => Ok(Self::Python),
            "go" => Ok(Self::Go),
            "java" => Ok(Self::Java),
            "php" => Ok(Self::Php),
            "ruby" => Ok(Self::Ruby),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!(
                "Invalid language: {s}. Use: javascript, typescript, rust, python, go, java, php, ruby"
            )),
        }
    }
}
