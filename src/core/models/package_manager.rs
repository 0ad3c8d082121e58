//! Package manager identity
//!
//! Only managers depwarden can actually audit are representable. "No usable
//! package manager" is `Option::None` at the call sites, never a variant here.

use serde::{Deserialize, Serialize};

use super::AuditCommand;

/// A JavaScript package manager with a built-in audit subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    /// npm, evidenced by `package-lock.json` or `npm-shrinkwrap.json`
    Npm,
    /// Yarn, evidenced by `yarn.lock`
    Yarn,
}

impl PackageManager {
    /// Name of the executable looked up on the host's `PATH`
    #[must_use]
    pub const fn executable(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }

    /// The audit command run for this package manager
    ///
    /// npm is restricted to high-and-above findings; yarn runs in summary mode.
    #[must_use]
    pub fn audit_command(self) -> AuditCommand {
        match self {
            Self::Npm => AuditCommand::new("npm", ["audit", "--audit-level=high"]),
            Self::Yarn => AuditCommand::new("yarn", ["audit", "--summary"]),
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.executable())
    }
}
