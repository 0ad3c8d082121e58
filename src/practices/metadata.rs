//! Practice metadata

use serde::{Deserialize, Serialize};

/// How much a violated practice matters
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeImpact {
    /// Should be fixed soon
    High,
    /// Worth fixing
    Medium,
    /// Minor improvement
    Small,
    /// Suggestion only
    Hint,
    /// Reported but not scored
    Off,
}

impl std::fmt::Display for PracticeImpact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Small => write!(f, "small"),
            Self::Hint => write!(f, "hint"),
            Self::Off => write!(f, "off"),
        }
    }
}

/// Declarative description of a practice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PracticeMetadata {
    /// Unique identifier, `<Language>.<Name>`
    pub id: &'static str,
    /// Human-readable title
    pub name: &'static str,
    /// How much a violation matters
    pub impact: PracticeImpact,
    /// What to do when the practice is violated
    pub suggestion: &'static str,
    /// Report once per project even when several components match
    pub report_only_once: bool,
    /// Where to read more
    pub url: &'static str,
}
