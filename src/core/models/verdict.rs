//! Practice verdicts

use serde::{Deserialize, Serialize};

/// Outcome of evaluating a practice against one project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The project follows the practice
    Practicing,
    /// The project violates the practice
    NotPracticing,
    /// The practice could not be evaluated
    Unknown,
}

impl Verdict {
    /// Whether this verdict should fail a CI run
    #[must_use]
    pub const fn is_violation(self) -> bool {
        matches!(self, Self::NotPracticing)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Practicing => write!(f, "practicing"),
            Self::NotPracticing => write!(f, "not practicing"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
