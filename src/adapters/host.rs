//! Executable lookup adapter

use crate::core::ports::CommandLocator;

/// Looks executables up on the host's `PATH`
///
/// Honours `PATHEXT` on Windows, so `npm` finds `npm.cmd`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathCommandLocator;

impl CommandLocator for PathCommandLocator {
    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
